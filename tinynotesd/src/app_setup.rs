use async_trait::async_trait;
use log::{error, info};
use rocket::fairing::{Fairing, Info};
use rocket::{Build, Rocket};
use tinynotes::config::AppConfig;
use tinynotes::storage::NoteStorage;

use crate::routes::{ApiRocketBuildExt, WebRocketBuildExt};

pub struct AppSetupFairing;

impl AppSetupFairing {
    pub fn new() -> Self {
        AppSetupFairing
    }
}

macro_rules! ok_or_bail {
    ($rocket:ident, $expr:expr, |$e:ident| $error_logger:expr) => ({
        match $expr {
            std::result::Result::Ok(ok) => ok,
            std::result::Result::Err(e) => {
                let $e = e;
                $error_logger;
                return std::result::Result::Err($rocket);
            },
        }
    });
}

#[async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        use rocket::fairing::Kind;
        Info {
            name: "app setup",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(
        &self,
        rocket: Rocket<Build>,
    ) -> rocket::fairing::Result {
        let config: AppConfig = ok_or_bail!(
            rocket,
            rocket.figment().extract(),
            |e| {
                for e in e {
                    error!("{e}");
                }
                info!("finishing due to a config parse error");
            }
        );

        let storage: NoteStorage = ok_or_bail!(
            rocket,
            NoteStorage::new(&config).await,
            |e| error!("note storage initialization failed: {e}")
        );

        Ok(
            rocket
                .manage(storage)
                .manage(config)
                .install_notes_api()
                .install_notes_web()
        )
    }
}
