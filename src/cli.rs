use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::input::{ReportInput, SourceRecord};
use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "kgs-roi")]
#[command(about = "Marketing ROI and engagement monetization report tool", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute KPIs for one reporting period and render the dashboard
    Report {
        /// Snapshot file (TOML, JSON or YAML); replaces the per-field flags
        #[arg(short, long, conflicts_with = "snapshot_fields")]
        input: Option<PathBuf>,

        #[command(flatten)]
        fields: SnapshotArgs,

        /// Configuration file (defaults to .kgsroi.toml discovery)
        #[arg(short, long, env = "KGS_ROI_CONFIG")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replace negative inputs with zero instead of failing
        #[arg(long = "clamp-negative")]
        clamp_negative: bool,

        /// Disable colors and emoji
        #[arg(long)]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Show the effective monetization model
    Model {
        /// Configuration file (defaults to .kgsroi.toml discovery)
        #[arg(short, long, env = "KGS_ROI_CONFIG")]
        config: Option<PathBuf>,
    },
}

/// Monthly figures entered directly on the command line.
#[derive(Args, Debug, Clone, Default)]
#[group(id = "snapshot_fields", multiple = true)]
pub struct SnapshotArgs {
    /// Marketing expenses (€)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub marketing_expenses: f64,

    /// Estimated annual revenue from this month's leads (€)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub estimated_annual_revenue: f64,

    /// Money saved by internal resources (€)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub money_saved: f64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub linkedin_impressions: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub linkedin_clicks: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub linkedin_views: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub google_ads_impressions: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub google_ads_clicks: i64,

    /// Google Ads views (YouTube)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub google_ads_views: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub website_impressions: i64,

    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub website_clicks: i64,
}

impl From<SnapshotArgs> for ReportInput {
    fn from(args: SnapshotArgs) -> Self {
        ReportInput {
            marketing_expenses: args.marketing_expenses,
            estimated_annual_revenue: args.estimated_annual_revenue,
            money_saved: args.money_saved,
            sources: vec![
                SourceRecord::new(
                    "LinkedIn",
                    args.linkedin_impressions,
                    args.linkedin_clicks,
                    args.linkedin_views,
                ),
                SourceRecord::new(
                    "Google Ads",
                    args.google_ads_impressions,
                    args.google_ads_clicks,
                    args.google_ads_views,
                ),
                SourceRecord::new("Website", args.website_impressions, args.website_clicks, 0),
            ],
        }
    }
}
