use lazy_static::lazy_static;
use log::{debug, info};

use crate::{
    readback::{
        backend::GlesBackend,
        binding::{OffsetPolicy, PixelReadoutBinding},
    },
    utils::config::Config,
};

pub struct ApplicationHost {
    pub config: Config,
    pub binding: PixelReadoutBinding<GlesBackend>,
}

impl ApplicationHost {
    pub fn new(config: Config) -> Self {
        let binding = PixelReadoutBinding::new(
            GlesBackend::new(config.require_pack_buffer),
            config.offset_policy(),
        )
        .with_tracing(config.tracing_mode);
        ApplicationHost { config, binding }
    }

    /// Logs the config and the offset policy. Call once a logger is installed.
    pub fn announce(&self) {
        if self.config.debug_mode {
            debug!("Host config: {:?}", self.config);
        }
        match self.binding.policy() {
            OffsetPolicy::Forward => info!("glReadPixels: pack buffer offsets are forwarded"),
            OffsetPolicy::Discard => {
                info!("glReadPixels: pack buffer offsets are dropped, reads start at 0")
            }
        }
    }
}

fn create_host() -> ApplicationHost {
    ApplicationHost::new(Config::from_env())
}

lazy_static! {
    // read-only after init, the binding itself carries no state
    pub static ref HOST: ApplicationHost = create_host();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_follows_config() {
        let host = ApplicationHost::new(Config {
            honor_offset: true,
            tracing_mode: true,
            ..Config::default()
        });
        assert_eq!(host.binding.policy(), OffsetPolicy::Forward);

        let host = ApplicationHost::new(Config::default());
        assert_eq!(host.binding.policy(), OffsetPolicy::Discard);
    }
}
