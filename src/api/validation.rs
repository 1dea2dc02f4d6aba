use super::ApiError;

pub fn validate_username(username: &str) -> Result<&str, ApiError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Username cannot be empty"));
    }

    if trimmed.len() > 64 {
        return Err(ApiError::validation(
            "Username must be 64 characters or less",
        ));
    }

    Ok(trimmed)
}

pub fn validate_movie_id(movie_id: &str) -> Result<&str, ApiError> {
    let trimmed = movie_id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Movie id cannot be empty"));
    }
    Ok(trimmed)
}

pub fn validate_search_query(query: &str) -> Result<&str, ApiError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Search query cannot be empty"));
    }
    Ok(trimmed)
}

pub fn validate_content(content: &str) -> Result<&str, ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::validation("Comment content cannot be empty"));
    }

    if content.len() > 4096 {
        return Err(ApiError::validation(
            "Comment content must be 4096 characters or less",
        ));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert_eq!(validate_username("  alice  ").unwrap(), "alice");
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username("a".repeat(65).as_str()).is_err());
    }

    #[test]
    fn test_validate_movie_id() {
        assert!(validate_movie_id("42").is_ok());
        assert!(validate_movie_id("").is_err());
        assert!(validate_movie_id("  ").is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert!(validate_search_query("blade runner").is_ok());
        assert_eq!(validate_search_query("  trimmed  ").unwrap(), "trimmed");
        assert!(validate_search_query("").is_err());
    }

    #[test]
    fn test_validate_content() {
        assert!(validate_content("nice movie").is_ok());
        assert!(validate_content("").is_err());
        assert!(validate_content("x".repeat(4097).as_str()).is_err());
    }
}
