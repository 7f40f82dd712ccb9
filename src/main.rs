use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use profileanalyzer::{
    AdvisorConfig, AnalyzerConfig, CareerAdvisor, Config, OutputFormat, ProfileAnalyzer,
    ProfileReport, ProfileSource,
};

#[derive(Parser, Debug)]
#[command(name = "profileanalyzer")]
#[command(version = "0.1.0")]
#[command(about = "Analyze LinkedIn-style profile text: keywords, skills, score, tips and roles")]
struct Args {
    /// Profile text passed directly on the command line
    #[arg(short, long)]
    text: Option<String>,

    /// Plain-text file containing the profile
    #[arg(long)]
    file: Option<PathBuf>,

    /// PDF export of the profile
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Analyze the built-in sample profile
    #[arg(long)]
    sample: bool,

    /// LinkedIn profile URL (cannot be fetched; paste the text instead)
    #[arg(long)]
    url: Option<String>,

    /// Output format (json, text, markdown)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of top keywords to show
    #[arg(long)]
    top_k: Option<usize>,

    /// JSON vocabulary file extending the built-in skills and roles
    #[arg(long)]
    vocabulary: Option<PathBuf>,

    /// Extra stop words, one per line
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// Skip the AI insights stage
    #[arg(long)]
    no_ai: bool,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        match e.downcast_ref::<profileanalyzer::Error>() {
            Some(err) => eprintln!("Error: {}\nHint: {}", err, err.remediation()),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("profileanalyzer=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(top_k) = args.top_k {
        config.top_keywords = top_k;
    }
    if let Some(ref path) = args.vocabulary {
        config.vocabulary_path = Some(path.clone());
    }
    if let Some(ref path) = args.stop_words {
        config.stop_words_path = Some(path.clone());
    }

    // Fail fast before reading any input.
    let analyzer = ProfileAnalyzer::from_config(&AnalyzerConfig::from(&config))?;

    let source = select_source(&args);
    tracing::info!("Analyzing profile from {}", source.label());
    let text = source.load()?;

    let analysis = analyzer.analyze(&text);
    tracing::info!(
        "Score {}/100 with {} skills and {} keywords",
        analysis.score,
        analysis.matched_skills.len(),
        analysis.keyword_frequency.len()
    );

    let advice = if args.no_ai || analysis.is_empty() {
        None
    } else {
        let advisor = CareerAdvisor::from_config(&AdvisorConfig::from(&config));
        Some(advisor.advise(&analysis, &text).await)
    };

    let report = ProfileReport::new(source.label(), analysis, config.top_keywords, advice);
    let output = report.render(OutputFormat::parse(&args.format))?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path.display());
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// First explicit source wins; a URL given alongside pasted content is ignored.
fn select_source(args: &Args) -> ProfileSource {
    let source = if let Some(ref text) = args.text {
        Some(ProfileSource::Paste(text.clone()))
    } else if let Some(ref path) = args.pdf {
        Some(ProfileSource::Pdf(path.clone()))
    } else if let Some(ref path) = args.file {
        Some(ProfileSource::TextFile(path.clone()))
    } else if args.sample {
        Some(ProfileSource::Sample)
    } else {
        None
    };

    match (source, &args.url) {
        (Some(source), Some(url)) => {
            tracing::warn!(
                "LinkedIn URLs cannot be fetched, ignoring {} and using {}",
                url,
                source.label()
            );
            source
        }
        (Some(source), None) => source,
        (None, Some(url)) => ProfileSource::LinkedInUrl(url.clone()),
        (None, None) => ProfileSource::Stdin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::parse_from(std::iter::once("profileanalyzer").chain(args.iter().copied()))
    }

    #[test]
    fn test_source_selection() {
        assert_eq!(select_source(&parse(&[])), ProfileSource::Stdin);
        assert_eq!(select_source(&parse(&["--sample"])), ProfileSource::Sample);
        assert_eq!(
            select_source(&parse(&["--text", "hello"])),
            ProfileSource::Paste("hello".to_string())
        );
        assert_eq!(
            select_source(&parse(&["--pdf", "cv.pdf"])),
            ProfileSource::Pdf(PathBuf::from("cv.pdf"))
        );
    }

    #[test]
    fn test_url_handling() {
        let url = "https://www.linkedin.com/in/someone";
        assert_eq!(
            select_source(&parse(&["--url", url])),
            ProfileSource::LinkedInUrl(url.to_string())
        );
        assert_eq!(
            select_source(&parse(&["--url", url, "--text", "pasted"])),
            ProfileSource::Paste("pasted".to_string())
        );
    }

    #[test]
    fn test_flags() {
        let args = parse(&["--sample", "--no-ai", "--top-k", "3", "-f", "json"]);
        assert!(args.no_ai);
        assert_eq!(args.top_k, Some(3));
        assert_eq!(OutputFormat::parse(&args.format), OutputFormat::Json);
    }
}
