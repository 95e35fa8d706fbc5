use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable, falling back to a default when the variable
/// is unset or cannot be parsed
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value to use when the variable is unset or unparseable
///
/// # Returns
/// The parsed value, or the default
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(raw) => raw.parse::<T>().unwrap_or_else(|_| {
            error!("Could not parse {} value {:?}, using default", env_var, raw);
            default
        }),
        Err(_) => default,
    }
}

/// Reads an environment variable, returning `None` when it is unset or
/// cannot be parsed
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|raw| raw.parse::<T>().ok())
}
