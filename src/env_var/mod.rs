use std::{env, fmt::Display, str::FromStr};
use tracing::{error, warn};

// Reads the variable and parses it into the requested type. An unset
// variable silently falls back to the given default; a set but
// unusable value falls back too, with a diagnostic, so a typo in the
// environment never aborts the client.
pub fn get_or<T: FromStr + Display>(var: &str, default: T) -> T {
    match env::var(var) {
        Ok(val) => match val.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                error!(
                    "could not parse the value of {}, using default: {}",
                    var, default
                );
                default
            }
        },
        Err(env::VarError::NotPresent) => default,
        Err(err) => {
            warn!("{}: {}, using default: {}", var, err, default);
            default
        }
    }
}
