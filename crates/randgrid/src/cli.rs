use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use randorg_fetch::data::options::DEFAULT_ENDPOINT;
use randorg_fetch::{FetchOptions, Fetcher, Progress, ReqwestClient, RequestSpec};
use tracing::info;

use crate::grid::{check_pixel_range, format_rows, to_gray_image};

#[derive(Clone, Debug, Parser)]
#[command(name = "randgrid", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Args)]
pub struct GlobalArgs {
    /// Integer generator endpoint
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Per-request connect and read timeout
    #[arg(long, global = true, value_name = "SECS", default_value_t = 120)]
    pub timeout: u64,

    /// Log every request at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Hide the progress bar
    #[arg(long, global = true)]
    pub no_progress: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "img", name = "image", about = "Save a square image of random gray pixels")]
    Image(ImageArg),
    #[command(name = "ints", about = "Print random integers as rows")]
    Ints(IntsArg),
}

#[derive(Clone, Debug, Args)]
pub struct ImageArg {
    /// Width and height of the image in pixels
    #[arg(long, default_value_t = 128)]
    pub size: u32,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min: i64,

    #[arg(long, default_value_t = 255, allow_negative_numbers = true)]
    pub max: i64,

    /// Output file; the format follows the extension (bmp or png)
    #[arg(short, long, default_value = "randImg.bmp")]
    pub output: PathBuf,
}

#[derive(Clone, Debug, Args)]
pub struct IntsArg {
    #[arg(short = 'n', long)]
    pub count: usize,

    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub min: i64,

    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max: i64,

    #[arg(long, default_value_t = NonZeroUsize::MIN)]
    pub columns: NonZeroUsize,
}

impl GlobalArgs {
    fn fetcher(&self, bar: Option<ProgressBar>) -> Result<Fetcher<ReqwestClient>> {
        let timeout = Duration::from_secs(self.timeout);
        let client = ReqwestClient::with_connect_timeout(timeout)
            .context("failed to set up HTTP client")?;

        let mut options = FetchOptions::default()
            .endpoint(self.endpoint.clone())
            .timeout(timeout);
        if let Some(bar) = bar {
            options = options.on_progress(report_to(bar));
        }

        Ok(Fetcher::new(client).with_options(options))
    }

    fn progress_bar(&self, total: usize) -> Option<ProgressBar> {
        if self.no_progress || total == 0 {
            return None;
        }

        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} integers ({msg})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=> "),
        );
        Some(bar)
    }

    async fn fetch(&self, request: &RequestSpec) -> Result<Vec<i64>> {
        self.fetch_reporting(request, self.progress_bar(request.count())).await
    }

    /// Fetch with `bar` tracking progress; the bar is cleared whether or not the fetch succeeds.
    async fn fetch_reporting(
        &self,
        request: &RequestSpec,
        bar: Option<ProgressBar>,
    ) -> Result<Vec<i64>> {
        let result = match self.fetcher(bar.clone()) {
            Ok(fetcher) => fetcher
                .fetch(request)
                .await
                .context("failed to fetch random integers"),
            Err(e) => Err(e),
        };

        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
        result
    }
}

fn report_to(bar: ProgressBar) -> Arc<dyn Fn(&Progress) + Send + Sync> {
    Arc::new(move |p: &Progress| {
        bar.set_length(p.total as u64);
        bar.set_position(p.received as u64);
        bar.set_message(format!("{:.0}%", p.percentage()));
    })
}

impl ImageArg {
    pub async fn run(&self, global: &GlobalArgs) -> Result<()> {
        check_pixel_range(self.min, self.max)?;
        let side = NonZeroUsize::new(self.size as usize).context("image size must be at least 1")?;
        let count = side
            .get()
            .checked_mul(side.get())
            .context("image size is too large")?;
        let request = RequestSpec::new(self.min, self.max, count, side)?;

        info!(size = self.size, "fetching random image");
        let values = global.fetch(&request).await?;

        let img = to_gray_image(&values, self.size, self.size)?;
        img.save(&self.output)
            .with_context(|| format!("failed to save image to {}", self.output.display()))?;

        info!(path = %self.output.display(), "image saved");
        Ok(())
    }
}

impl IntsArg {
    pub async fn run(&self, global: &GlobalArgs) -> Result<()> {
        let request = RequestSpec::new(self.min, self.max, self.count, self.columns)?;

        let values = global.fetch(&request).await?;

        print!("{}", format_rows(&values, self.columns.get()));
        Ok(())
    }
}
