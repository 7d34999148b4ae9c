//! parsely-meta - page metadata and beacon output for Parse.ly.

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ViewArg};
use parsely_meta::{
    config::{Options, OptionsInput},
    content::{ContentRepository, MemoryRepository, ViewContext},
    debug, log, logger,
    page::DescriptorBuilder,
    render,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Validate { pairs } => validate(pairs),
        Commands::Page { view, json } => {
            let options = load_options(&cli)?;
            page(&options, &load_site(&cli)?, view, *json)
        }
        Commands::Beacon { post } => {
            let options = load_options(&cli)?;
            beacon(&options, &load_site(&cli)?, *post)
        }
        Commands::Amp => amp(&load_options(&cli)?),
        Commands::Fbia => {
            let embed = render::instant_articles_embed(&load_options(&cli)?);
            debug!("fbia"; "registering `{}` as {}", embed.identifier, embed.name);
            println!("{}", embed.payload);
            Ok(())
        }
    }
}

/// Load options, warning when no site ID is set.
fn load_options(cli: &Cli) -> Result<Options> {
    let options = Options::load(&cli.config)?;
    if !options.is_configured() {
        log!("warn"; "no site id in `{}`, nothing will be rendered", cli.config.display());
    }
    Ok(options)
}

fn load_site(cli: &Cli) -> Result<MemoryRepository> {
    let Some(path) = &cli.site else {
        bail!("this command needs a site snapshot, pass --site <file>");
    };
    let repo = MemoryRepository::from_path(path)
        .with_context(|| format!("failed to load site snapshot `{}`", path.display()))?;
    debug!("site"; "loaded `{}`", repo.site_name());
    Ok(repo)
}

fn page(options: &Options, repo: &MemoryRepository, view: &ViewArg, json: bool) -> Result<()> {
    let view = view.resolve(repo)?;
    let coauthors = repo.coauthors();

    let mut builder = DescriptorBuilder::new(repo, options);
    if let Some(provider) = &coauthors {
        builder = builder.author_provider(provider);
    }

    let Some(page) = builder.build(&view)? else {
        log!("page"; "nothing to render for this view");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        println!("{}", render::render_ld_json(&page)?);
    }
    Ok(())
}

fn beacon(options: &Options, repo: &MemoryRepository, post: Option<u64>) -> Result<()> {
    let view = match post {
        Some(id) => ViewArg::Post { id }.resolve(repo)?,
        None => ViewContext::Other,
    };

    match render::render_beacon(options, repo, &view) {
        Some(html) => print!("{html}"),
        None => log!("beacon"; "beacon withheld for this view"),
    }
    Ok(())
}

fn amp(options: &Options) -> Result<()> {
    match render::amp_analytics(options) {
        Some(config) => println!("{}", serde_json::to_string_pretty(&config)?),
        None => log!("amp"; "no site id, analytics left unchanged"),
    }
    Ok(())
}

fn validate(pairs: &[(String, String)]) -> Result<()> {
    let mut input = OptionsInput::default();
    for (key, value) in pairs {
        input.set(key, value.as_str())?;
    }

    match input.validate() {
        Ok(options) => {
            print!("{}", toml::to_string_pretty(&options)?);
            Ok(())
        }
        Err(errors) => {
            for err in &errors {
                log!("error"; "{}: {err}", err.key());
            }
            bail!("{} invalid option(s)", errors.len())
        }
    }
}
