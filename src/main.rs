use clap::{Parser, Subcommand};
use post_discovery::audit;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "post-discovery")]
#[command(about = "Topic-relevance tooling for the content corpus")]
#[command(long_about = "\
Topic-relevance tooling for the content corpus

Works on the per-locale posts files the site build emits
(posts.<locale>.json — a JSON array of content items with id, title,
summary, publishedAt, and tags). Scoring is the same IDF-weighted path the
site uses for its related-posts box, so what these commands print is what
readers get.

Use 'audit' after editing the topic taxonomy to find posts that would show
an empty related-posts box, and 'report' to eyeball the actual selections
with their score breakdowns.")]
#[command(version)]
struct Cli {
    /// Directory holding the per-locale posts files
    #[arg(long, default_value = "public/data", global = true)]
    data_dir: PathBuf,

    /// Two-letter locale tag selecting the posts file
    #[arg(long, default_value = "en", global = true)]
    locale: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List posts with no meaningful related posts
    Audit {
        /// Minimum relevance score for a related post to count
        #[arg(long, default_value_t = 0.5)]
        min_score: f64,
    },
    /// Preview the related-posts selection for every post, with scores
    Report {
        /// Maximum related posts per item
        #[arg(long, default_value_t = 3)]
        limit: usize,

        /// Score bar for the primary selection; weaker positive-score
        /// matches pad the list when too few clear it
        #[arg(long, default_value_t = 0.5)]
        min_score: f64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let path = cli.data_dir.join(format!("posts.{}.json", cli.locale));
    let items = audit::load_items(&path)?;

    match cli.command {
        Command::Audit { min_score } => {
            let unrelated = audit::find_unrelated(&items, min_score);
            println!(
                "[audit] locale={} posts={} min_score={}",
                cli.locale,
                items.len(),
                min_score
            );
            println!("posts_with_no_related={}", unrelated.len());
            for id in unrelated {
                println!("{id}");
            }
        }
        Command::Report { limit, min_score } => {
            let report = audit::build_report(&items, limit, min_score);
            println!(
                "[report] locale={} posts={} limit={}",
                cli.locale,
                items.len(),
                limit
            );
            for entry in report {
                println!("\n- {}", entry.id);
                for line in entry.related {
                    let shared: Vec<String> = line
                        .shared
                        .iter()
                        .take(5)
                        .map(|s| format!("{}:{:.2}", s.id, s.weight))
                        .collect();
                    println!(
                        "  -> {} score={:.2} shared=[{}]",
                        line.id,
                        line.score,
                        shared.join(", ")
                    );
                }
            }
        }
    }

    Ok(())
}
