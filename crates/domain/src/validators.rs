pub fn validate_resource_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Resource name cannot be empty".to_string());
    }
    if name.len() > 100 {
        return Err("Resource name cannot exceed 100 characters".to_string());
    }
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_chars {
        return Err(
            "Resource name can only contain alphanumeric characters, hyphens, and underscores"
                .to_string(),
        );
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), String> {
    if url.len() > 2048 {
        return Err("URL cannot exceed 2048 characters".to_string());
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }
    Ok(())
}
