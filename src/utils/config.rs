use std::{env, str::FromStr};

use crate::readback::binding::OffsetPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub debug_mode: bool,
    pub tracing_mode: bool,
    // forward the caller's pack buffer offset instead of always reading to 0
    pub honor_offset: bool,
    // skip pack buffer readbacks when none is bound, costs a glGetIntegerv per call
    pub require_pack_buffer: bool,
    // tried before the built-in library list when resolving gl symbols
    pub gl_library: Option<String>,
}

fn try_get<T: FromStr>(key: &str) -> Option<T> {
    match env::var(key) {
        Ok(val) => match val.parse::<T>() {
            Ok(val) => Some(val),
            Err(_) => None,
        },
        Err(_) => None,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        "1" => Some(true),
        "0" => Some(false),
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

fn booleanify(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => parse_bool(value.as_str()).unwrap_or(default),
        Err(_) => default,
    }
}

impl Config {
    pub fn from_env() -> Config {
        Config {
            debug_mode: booleanify("GLUTIL_DEBUG", false),
            tracing_mode: booleanify("GLUTIL_TRACING", false),
            honor_offset: booleanify("GLUTIL_HONOR_OFFSET", false),
            require_pack_buffer: booleanify("GLUTIL_REQUIRE_PACK_BUFFER", false),
            gl_library: try_get::<String>("GLUTIL_GL_LIBRARY").filter(|path| !path.is_empty()),
        }
    }

    pub fn offset_policy(&self) -> OffsetPolicy {
        if self.honor_offset {
            OffsetPolicy::Forward
        } else {
            OffsetPolicy::Discard
        }
    }

    /// Default `env_logger` filter. Timings are logged at debug level, so
    /// tracing alone has to open it up as well.
    pub fn log_filter(&self) -> &'static str {
        if self.debug_mode || self.tracing_mode {
            "debug"
        } else {
            "info"
        }
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            debug_mode: false,
            tracing_mode: false,
            honor_offset: false,
            require_pack_buffer: false,
            gl_library: None,
        }
    }
}
