use crate::cli::open;
use crate::error::Result;
use crate::query::available_years;

pub fn run(file: Option<&str>) -> Result<()> {
    let session = open(file)?;
    if session.store.is_empty() {
        println!("No transactions loaded.");
        return Ok(());
    }
    for year in available_years(session.store.transactions()) {
        println!("{year}");
    }
    Ok(())
}
