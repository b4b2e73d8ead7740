pub mod env_var {
    use lazy_static::lazy_static;

    lazy_static! {
        static ref ENV_VAR: EnvVar = load_env();
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EnvVar {
        pub app_name: String,
        pub log_filter: String,
        pub log_ansi: bool,
    }

    macro_rules! get_env_or {
        ($env:literal, $default:literal) => {
            std::env::var($env).unwrap_or_else(|_| String::from($default))
        };
    }

    fn parse_bool(name: &str, value: &str) -> bool {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => panic!("Invalid {name}: expected a boolean, found {value:?}"),
        }
    }

    /// Read the configuration from the process environment.
    ///
    /// # Panic
    ///
    /// Panics if `LOG_ANSI` is set to something other than a boolean.
    pub fn load_env() -> EnvVar {
        let app_name = get_env_or!("APP_NAME", "user-store");
        let log_filter = get_env_or!("LOG_FILTER", "info");
        let log_ansi = parse_bool("LOG_ANSI", &get_env_or!("LOG_ANSI", "true"));

        EnvVar {
            app_name,
            log_filter,
            log_ansi,
        }
    }

    pub fn get() -> &'static EnvVar {
        &ENV_VAR
    }
}

pub mod logging {
    use tracing_subscriber::EnvFilter;

    use super::env_var::EnvVar;

    /// Install the global tracing subscriber.
    ///
    /// Falls back to the `info` level when the configured filter does not parse.
    pub fn init(env: &EnvVar) {
        let filter = EnvFilter::try_new(&env.log_filter).unwrap_or_else(|err| {
            eprintln!("Invalid LOG_FILTER {:?}: {err}", env.log_filter);
            EnvFilter::new("info")
        });

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(env.log_ansi)
            .with_target(true)
            .init();
    }
}
