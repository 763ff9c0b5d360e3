use crate::error::Result;
use crate::settings::{load_settings, save_settings};

pub fn run(csv_file: Option<String>, currency: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(f) = csv_file {
        settings.csv_file = f;
    }
    if let Some(c) = currency {
        settings.currency = c;
    }
    save_settings(&settings)?;

    println!("Settings saved.");
    println!("  CSV file: {}", settings.csv_file);
    println!("  Currency: {}", settings.currency);
    Ok(())
}
