//! # qq-chat-history CLI
//!
//! Command-line interface for the qq-chat-history library.

use std::process;
use std::time::{Duration, Instant};

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use qq_chat_history::cli::Args;
use qq_chat_history::core::{OutputConfig, apply_filters};
use qq_chat_history::format::{correct_extension, write_to_path};
use qq_chat_history::{ChatHistoryError, ChatParser, Message};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), ChatHistoryError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    let output_path = correct_extension(&args.output, args.format);
    let filter_config = args.filter_config()?;

    println!("📦 qq-chat-history v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", output_path.display());
    println!("📄 Format:  {}", args.format);
    println!("🔎 Mode:    {}", args.mode);
    if args.streaming {
        println!("🌊 Reading: Streaming");
    }
    if let Some(ref after) = args.after {
        println!("📅 After:   {after}");
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {before}");
    }
    if let Some(ref id) = args.id {
        println!("👤 Id:      {id}");
    }
    if let Some(ref name) = args.name {
        println!("👤 Name:    {name}");
    }
    println!();

    let parser = ChatParser::with_config(args.parser_config());
    let (messages, parse_time) = if args.streaming {
        parse_streaming(&parser, &args)?
    } else {
        parse_regular(&parser, &args)?
    };
    let original_count = messages.len();
    println!(
        "   Found {} messages ({:.2}s)",
        original_count,
        parse_time.as_secs_f64()
    );

    let messages = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filtered = apply_filters(messages, &filter_config);
        println!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        messages
    };

    println!("💾 Writing {}...", args.format);
    let write_start = Instant::now();
    let output_config = OutputConfig::new().with_indent(args.indent);
    write_to_path(&messages, &output_path, args.format, &output_config)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    println!();
    println!("✅ Done! Output saved to {}", output_path.display());

    println!();
    println!("📊 Summary:");
    println!("   Parsed:    {original_count} messages");
    if filter_config.is_active() {
        println!("   Kept:      {} messages", messages.len());
    }
    println!("   Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Parse the whole file in memory.
fn parse_regular(
    parser: &ChatParser,
    args: &Args,
) -> Result<(Vec<Message>, Duration), ChatHistoryError> {
    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let history = parser.parse(&args.input)?;
    Ok((history.into_messages(), parse_start.elapsed()))
}

/// Parse line by line; a read error aborts the conversion.
fn parse_streaming(
    parser: &ChatParser,
    args: &Args,
) -> Result<(Vec<Message>, Duration), ChatHistoryError> {
    println!("⏳ Streaming...");
    let parse_start = Instant::now();
    let messages = parser
        .stream(&args.input)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok((messages, parse_start.elapsed()))
}
