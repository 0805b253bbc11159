use status_result::config::Config;
use status_result::{error, success, Outcome};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Greeting {
    greeting: String,
}

/// Returns a success or a failure depending on `flag`
fn foo(flag: bool) -> Outcome<Greeting> {
    if flag {
        return success!(Greeting {
            greeting: "hello!".to_string(),
        });
    }
    error!()
}

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Configuration loaded: {:?}", config);

    for flag in config.flags.iter().copied() {
        walk_through(flag)?;
    }

    info!("Walk-through complete");
    Ok(())
}

/// Demonstrate every way of consuming an outcome
fn walk_through(flag: bool) -> anyhow::Result<()> {
    info!("=== Outcome walk-through (flag = {}) ===", flag);

    let res = foo(flag);

    // Callback style
    res.is_err(|_| warn!("is_err: the outcome is a failure"));
    res.is_ok(|data| info!(greeting = %data.greeting, "is_ok: the outcome is a success"));
    res.match_with(
        |_| info!("match_with: success arm"),
        |_| info!("match_with: failure arm"),
    );

    // Narrowing by match
    match &res {
        Outcome::Success(ok) => {
            info!(greeting = %ok.data().greeting, err = ?ok.err(), "narrowed to success");
        }
        Outcome::Failure(fail) => {
            info!(data = ?fail.data(), err = ?fail.err(), "narrowed to failure");
        }
    }

    // Optional access on the unnarrowed value
    info!(greeting = ?res.data().map(|d| d.greeting.as_str()), "optional access");

    // Narrowing after destructuring the discriminant
    let Outcome::Success(ok) = &res else {
        info!(data = ?res.data(), "destructured: not a success");
        return Ok(());
    };
    info!(greeting = %ok.data().greeting, "destructured: success");

    // Runtime narrowing, only reached on a success
    let ok = res.as_success()?;
    info!(success = ok.success(), "as_success");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foo_success() {
        let res = foo(true);
        assert!(res.success());
        assert_eq!(res.data().map(|d| d.greeting.as_str()), Some("hello!"));
        assert!(res.err().is_none());
    }

    #[test]
    fn test_foo_failure() {
        let res = foo(false);
        assert!(!res.success());
        assert_eq!(res.err(), Some(&()));
        assert!(res.data().is_none());
    }

    #[test]
    fn test_walk_through_both_flags() {
        assert!(walk_through(true).is_ok());
        assert!(walk_through(false).is_ok());
    }
}
