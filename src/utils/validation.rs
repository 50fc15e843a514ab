use anyhow::{anyhow, Result};
use chrono::NaiveDate;

pub const MAX_FESTIVAL_NAME_LENGTH: usize = 100;
pub const MAX_LINK_LENGTH: usize = 500;

pub fn validate_festival_name(name: &str) -> Result<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(anyhow!("Festival name cannot be empty"));
    }

    if name.chars().count() > MAX_FESTIVAL_NAME_LENGTH {
        return Err(anyhow!(
            "Festival name cannot be longer than {} characters",
            MAX_FESTIVAL_NAME_LENGTH
        ));
    }

    if name.contains('\n') || name.contains('\r') {
        return Err(anyhow!("Festival name cannot contain line breaks"));
    }

    Ok(())
}

pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(anyhow!(
            "Festival cannot end ({}) before it starts ({})",
            end.format("%d.%m.%Y"),
            start.format("%d.%m.%Y")
        ));
    }

    Ok(())
}

pub fn validate_link(link: &str) -> Result<()> {
    if link.is_empty() {
        return Err(anyhow!("Link cannot be empty"));
    }

    if link.len() > MAX_LINK_LENGTH {
        return Err(anyhow!("Link cannot be longer than {} characters", MAX_LINK_LENGTH));
    }

    if !(link.starts_with("http://") || link.starts_with("https://")) {
        return Err(anyhow!("Link must start with http:// or https://"));
    }

    if link.chars().any(char::is_whitespace) {
        return Err(anyhow!("Link cannot contain spaces"));
    }

    Ok(())
}

/// Festival search text, as typed after `/attend` and friends
pub fn validate_festival_query(query: &str) -> Result<()> {
    let query = query.trim();

    if query.is_empty() {
        return Err(anyhow!("Festival name cannot be empty"));
    }

    if query.chars().count() > MAX_FESTIVAL_NAME_LENGTH {
        return Err(anyhow!("Festival name is too long"));
    }

    Ok(())
}
