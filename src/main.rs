// Countdown Page
// Command-line entry point

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand, ValueEnum};

use countdown_page::models::page::CountdownParams;
use countdown_page::services::config::AppConfig;
use countdown_page::services::countdown::{
    DisplaySurface, JsonLinesSurface, StopReason, SystemClock, TerminalSurface,
};
use countdown_page::services::page::{share_link, CountdownPage, EditField, LinkBuilder};
use countdown_page::utils::date::timezone_choices;

#[derive(Parser, Debug)]
#[command(name = "countdown-page", version)]
#[command(about = "Live countdowns driven by link parameters")]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a live countdown for a page link or query string
    Run {
        link: String,
        /// Emit one JSON object per tick instead of redrawing a line
        #[arg(long)]
        json: bool,
    },
    /// Build a countdown link
    Build {
        #[arg(long, default_value = "Countdown")]
        title: String,
        /// Target date, e.g. 2030-01-01T09:30
        #[arg(long)]
        date: String,
        /// UTC offset as +HH:MM; omit for the viewer's local time
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        offset: String,
        #[arg(long, default_value = "clock")]
        image: String,
        #[arg(long, default_value = "lcd14")]
        font: String,
        #[arg(long, default_value = "gradient")]
        effect: String,
        /// Print the preview variant of the link
        #[arg(long)]
        preview: bool,
        /// Open the link in the default browser
        #[arg(long)]
        open: bool,
    },
    /// Rewrite the title or date of an edit-mode link
    Edit {
        link: String,
        #[arg(long, value_enum)]
        field: FieldArg,
        #[arg(long)]
        value: String,
    },
    /// Print the share link for a countdown
    Share { link: String },
    /// List timezones with their current UTC offsets
    Zones {
        #[arg(default_value = "")]
        filter: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FieldArg {
    Title,
    Date,
}

impl From<FieldArg> for EditField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Title => EditField::Title,
            FieldArg::Date => EditField::Date,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Run { link, json } => run_countdown(&config, &link, json).await,
        Command::Build {
            title,
            date,
            offset,
            image,
            font,
            effect,
            preview,
            open,
        } => {
            let builder = LinkBuilder::new(config.base_url.as_str())
                .title(title)
                .date(date)
                .offset(offset)
                .image(image)
                .font(font)
                .effect(effect);
            let link = if preview { builder.preview_link() } else { builder.build() };
            println!("{link}");

            if open {
                webbrowser::open(&link).with_context(|| format!("failed to open {link}"))?;
            }
            Ok(())
        }
        Command::Edit { link, field, value } => {
            let page = CountdownPage::initialize(CountdownParams::from_url(&link), &Local);
            let Some(session) = page.edit(field.into()) else {
                anyhow::bail!("link is not in edit mode (add edit=true)");
            };

            match session.save(&link, &value) {
                Some(url) => println!("{url}"),
                None => eprintln!("{} unchanged", session.field().param()),
            }
            Ok(())
        }
        Command::Share { link } => {
            println!("{}", share_link(&config.share_url, &link));
            Ok(())
        }
        Command::Zones { filter } => {
            let viewer_zone = iana_time_zone::get_timezone()
                .ok()
                .and_then(|name| name.parse::<Tz>().ok());
            for choice in timezone_choices(&filter, Utc::now(), viewer_zone) {
                println!("{}", choice.label);
            }
            Ok(())
        }
    }
}

async fn run_countdown(config: &AppConfig, link: &str, json: bool) -> Result<()> {
    let page = CountdownPage::initialize(CountdownParams::from_url(link), &Local);

    let surface: Box<dyn DisplaySurface> = if json {
        Box::new(JsonLinesSurface::new(io::stdout()))
    } else {
        println!("{}", page.title());
        println!("{} ({})", page.suffix_text, page.offset_label);
        Box::new(TerminalSurface::new(io::stdout()))
    };

    let handle = page.start_countdown(surface, SystemClock, config.refresh_config());

    let reason = tokio::select! {
        joined = handle.join() => joined.context("countdown task failed")?,
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for Ctrl-C")?;
            StopReason::Cancelled
        }
    };

    if !json {
        println!();
    }
    log::info!("Countdown finished: {:?}", reason);
    Ok(())
}
