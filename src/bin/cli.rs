//! TubeLens CLI
//!
//! Terminal front end for the analysis backend: submits keyword and
//! comment analyses and prints the results.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tubelens::{
    analysis::{AnalysisOrchestrator, AnalysisState, RankingCoordinator},
    error::Result,
    models::{
        CommentAnalyzeRequest, CommentEntry, Config, ErrorInfo, KeywordAnalyzeRequest,
        YouTuberRanking,
    },
    services::{ApiClient, CommentService, KeywordService, RankingService},
    utils::time::format_timestamp,
};

/// TubeLens - YouTube Keyword & Comment Analytics
#[derive(Parser, Debug)]
#[command(name = "tubelens", version, about = "YouTube keyword and comment analytics client")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "tubelens.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print raw results as pretty JSON instead of formatted text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a keyword and show its YouTuber ranking
    Keyword {
        /// Keyword to analyze (e.g., "파이썬 강의")
        term: String,

        /// Skip the follow-up YouTuber ranking query
        #[arg(long)]
        skip_ranking: bool,
    },

    /// Analyze the comments of a video
    Comments {
        /// YouTube video URL
        url: String,

        /// Maximum number of comments to fetch
        #[arg(long)]
        max_results: Option<u32>,
    },

    /// Show the YouTuber ranking for a search term
    Ranking {
        /// Search term
        term: String,
    },

    /// Show keyword and comment analysis history
    History,

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    let client = Arc::new(ApiClient::new(&config.api)?);

    match cli.command {
        Command::Keyword { term, skip_ranking } => {
            let orchestrator = AnalysisOrchestrator::new(KeywordService::new(Arc::clone(&client)));
            orchestrator.submit(KeywordAnalyzeRequest::new(&term)).await;

            match orchestrator.state() {
                AnalysisState::Success(result) => {
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&result)?);
                    } else {
                        log::info!("\"{}\" 분석 결과", result.keyword);
                        log::info!("  검색량: {}", result.metrics.search_volume);
                        log::info!("  경쟁도: {:.2}", result.metrics.competition);
                        log::info!("  추천도: {:.2}", result.metrics.recommendation_score);

                        if !result.related_keywords.is_empty() {
                            log::info!("관련 키워드:");
                            for related in &result.related_keywords {
                                log::info!(
                                    "  {} (검색량 {}, 경쟁도 {:.2})",
                                    related.keyword,
                                    related.search_volume,
                                    related.competition
                                );
                            }
                        }

                        log::info!("분석 시간: {}", format_timestamp(&result.analyzed_at));
                    }

                    if !skip_ranking {
                        show_ranking(Arc::clone(&client), &config, &result.keyword, cli.json)
                            .await?;
                    }
                }
                AnalysisState::Error(info) => report_error(&info),
                _ => {}
            }
        }

        Command::Comments { url, max_results } => {
            let orchestrator = AnalysisOrchestrator::new(CommentService::new(Arc::clone(&client)));
            let mut request = CommentAnalyzeRequest::new(&url);
            if let Some(max_results) = max_results {
                request = request.with_max_results(max_results);
            }
            orchestrator.submit(request).await;

            match orchestrator.state() {
                AnalysisState::Success(result) => {
                    if cli.json {
                        println!("{}", serde_json::to_string_pretty(&result)?);
                        return Ok(());
                    }

                    let video = &result.video_info;
                    log::info!("\"{}\" ({})", video.title, video.channel_title);
                    log::info!(
                        "  조회수 {} / 댓글 {}",
                        video.view_count,
                        video.comment_count
                    );

                    if let Some(sentiment) = &result.sentiment {
                        log::info!(
                            "감성 분석 (댓글 {}개): 긍정 {:.0}% / 중립 {:.0}% / 부정 {:.0}%",
                            sentiment.total_analyzed,
                            sentiment.positive * 100.0,
                            sentiment.neutral * 100.0,
                            sentiment.negative * 100.0
                        );
                    }

                    if !result.frequent_words.is_empty() {
                        log::info!("자주 언급된 단어:");
                        for word in &result.frequent_words {
                            log::info!(
                                "  {} ({}회, {:.1}%)",
                                word.word,
                                word.count,
                                word.percentage
                            );
                        }
                    }

                    print_comment_section("시청자 요청", &result.viewer_requests);
                    print_comment_section("시청자 질문", &result.viewer_questions);
                    print_comment_section("인기 댓글", &result.top_comments);

                    log::info!("분석 시간: {}", format_timestamp(&result.analyzed_at));
                }
                AnalysisState::Error(info) => report_error(&info),
                _ => {}
            }
        }

        Command::Ranking { term } => {
            show_ranking(Arc::clone(&client), &config, &term, cli.json).await?;
        }

        Command::History => {
            let keywords = KeywordService::new(Arc::clone(&client));
            let comments = CommentService::new(Arc::clone(&client));

            let (keyword_page, comment_page) =
                futures::try_join!(keywords.history(), comments.history())?;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&keyword_page)?);
                println!("{}", serde_json::to_string_pretty(&comment_page)?);
                return Ok(());
            }

            log::info!("키워드 분석 이력 (총 {}건):", keyword_page.total);
            for entry in &keyword_page.items {
                log::info!(
                    "  {} (검색량 {}) — {}",
                    entry.keyword,
                    entry.search_volume,
                    format_timestamp(&entry.analyzed_at)
                );
            }

            log::info!("댓글 분석 이력 (총 {}건):", comment_page.total);
            for entry in &comment_page.items {
                log::info!(
                    "  {} [{}] — {}",
                    entry.video_title,
                    entry.video_id,
                    format_timestamp(&entry.analyzed_at)
                );
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            let config = Config::load(&cli.config)?;
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (api.base_url = {})", config.api.base_url);
        }
    }

    Ok(())
}

/// Run the dependent ranking query for a submitted search term.
async fn show_ranking(
    client: Arc<ApiClient>,
    config: &Config,
    term: &str,
    json: bool,
) -> Result<()> {
    let coordinator = RankingCoordinator::new(RankingService::new(client, config.ranking.clone()));
    coordinator.set_term(term).await;

    match coordinator.state() {
        AnalysisState::Success(rankings) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&rankings)?);
                return Ok(());
            }
            log::info!("\"{}\" 유튜버 순위:", term);
            for ranking in &rankings {
                print_ranking_row(ranking);
            }
        }
        AnalysisState::Error(info) => report_error(&info),
        _ => {}
    }

    Ok(())
}

fn print_ranking_row(ranking: &YouTuberRanking) {
    log::info!(
        "  {:>2}. {} — 구독자 {}명, 영상당 평균 조회수 {:.0}",
        ranking.rank,
        ranking.channel_title,
        ranking.subscriber_count,
        ranking.avg_views_per_video
    );
}

fn print_comment_section(title: &str, entries: &[CommentEntry]) {
    if entries.is_empty() {
        return;
    }
    log::info!("{}:", title);
    for entry in entries {
        log::info!(
            "  [{}] {} (좋아요 {})",
            entry.author,
            entry.text,
            entry.like_count
        );
    }
}

/// Print a classified error the way the dashboard would render it.
fn report_error(info: &ErrorInfo) {
    log::error!("{}: {}", info.title, info.message);
    if let Some(suggestion) = &info.suggestion {
        log::info!("{}", suggestion);
    }
}
