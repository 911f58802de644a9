//! Render the selection form to stdout.

use crate::cli::{local_runtime, RenderArgs};
use crate::config::Config;
use crate::discovery::ImageDiscovery;
use crate::error::Result;
use crate::form::FormRenderer;
use crate::registry::ProfileRegistry;

pub async fn execute(args: RenderArgs) -> Result<()> {
    let config = Config::load(&args.config)?;

    let mut registry = ProfileRegistry::new(config.profiles.clone());
    if args.discover {
        let discovery = ImageDiscovery::new(&config.discovery, local_runtime()?);
        registry.extend(discovery.discover(&args.network_name).await?);
    }

    let images = config.images.for_groups(&args.groups);
    let renderer = FormRenderer::new(&config.templates);
    println!("{}", renderer.render(&registry, &images));
    Ok(())
}
