use super::error::RequestError;

pub fn validate_destination(destination: &str) -> Result<(), RequestError> {
    if destination.trim().is_empty() {
        return Err(RequestError::invalid_destination(
            "Destination path cannot be empty",
        ));
    }

    if destination.chars().any(char::is_control) {
        return Err(RequestError::invalid_destination(
            "Destination path cannot contain control characters",
        ));
    }

    Ok(())
}
