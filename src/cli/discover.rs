//! List discovered container image profiles.

use tabled::{Table, Tabled};

use crate::cli::{local_runtime, DiscoverArgs};
use crate::config::Config;
use crate::discovery::{ImageDiscovery, CONTAINER_IMAGE_OPTION, READ_ONLY_VOLUMES_OPTION};
use crate::error::Result;

#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Display")]
    display: String,
    #[tabled(rename = "Image")]
    image: String,
    #[tabled(rename = "GPU")]
    gpu: &'static str,
}

pub async fn execute(args: DiscoverArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    config.init_logging();

    let discovery = ImageDiscovery::new(&config.discovery, local_runtime()?);
    let profiles = discovery.discover(&args.network_name).await?;

    if profiles.is_empty() {
        println!(
            "No image tags matching suffix '{}' found.",
            config.discovery.tag_suffix
        );
        return Ok(());
    }

    let rows: Vec<ProfileRow> = profiles
        .iter()
        .map(|profile| ProfileRow {
            key: profile.key.clone(),
            display: profile.display.clone(),
            image: profile
                .options
                .get(CONTAINER_IMAGE_OPTION)
                .and_then(|value| value.as_str())
                .unwrap_or("")
                .to_string(),
            gpu: if profile.options.contains_key(READ_ONLY_VOLUMES_OPTION) {
                "yes"
            } else {
                "no"
            },
        })
        .collect();

    println!("{}", Table::new(rows));
    Ok(())
}
