//! Domains command: list built-in categories.

use crate::domain::{AppError, DOMAIN_OPTIONS, get_domain_template};

pub fn run_domains() -> Result<(), AppError> {
    for category in DOMAIN_OPTIONS {
        let template = get_domain_template(category);
        println!("{}", category);
        println!("  {}", template.focus_placeholder);
    }
    Ok(())
}
