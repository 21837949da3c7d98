use anyhow::Result;
use ignore_fetch_github::Getter;

/// Print the available pattern files, one per line, in tree order.
pub async fn run(getter: &Getter) -> Result<()> {
    let files = getter.list().await?;
    println!("{}", files.join("\n"));
    Ok(())
}
