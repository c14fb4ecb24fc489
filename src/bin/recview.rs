//! Recording console (recview) - Main binary entry point

use recview::cli::args::{
    BrowseArgs, CleanupArgs, Command, DownloadArgs, StatsArgs, WatchArgs, exit_code, parse_args,
};
use recview::cli::output::{
    PageFileSink, StdoutSink, format_dashboard_text, format_listing_json, format_listing_text,
    format_stats_json,
};
use recview::controllers::dashboard::now_millis;
use recview::page::ContainerId;
use recview::runtime::{FrameSink, WatchLoop, WatchOptions};
use recview::{Backend, Config, Dashboard, FileBrowser, HttpBackend, Page};
use std::path::Path;
use std::process;
use std::sync::Arc;

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug recview watch
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            println!("recview {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        _ => {}
    }

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    let config = match cli_args.global.build_config(|key| std::env::var(key).ok()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(exit_code(&e));
        }
    };

    let backend: Arc<dyn Backend> = match HttpBackend::new(&config) {
        Ok(b) => Arc::new(b),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(exit_code(&e));
        }
    };

    let code = match &cli_args.command {
        Command::Browse(browse_args) => handle_browse(backend, browse_args),
        Command::Download(download_args) => handle_download(backend, download_args),
        Command::Stats(stats_args) => handle_stats(backend, stats_args),
        Command::Watch(watch_args) => handle_watch(backend, &config, watch_args),
        Command::Record => handle_command(backend, true),
        Command::Stop => handle_command(backend, false),
        Command::Cleanup(cleanup_args) => handle_cleanup(backend, cleanup_args),
    };

    process::exit(code);
}

fn write_out(out: Option<&String>, page: &Page) -> i32 {
    if let Some(target) = out {
        if let Err(e) = PageFileSink::new(target).emit(page) {
            eprintln!("Error: Failed to write page to {target}: {e}");
            return 4;
        }
    }
    0
}

fn handle_browse(backend: Arc<dyn Backend>, args: &BrowseArgs) -> i32 {
    let mut page = Page::new();
    let mut browser = FileBrowser::new(backend);

    let loaded = browser.load_files(&mut page, &args.path);
    let written = write_out(args.out.as_ref(), &page);

    if let Err(e) = loaded {
        eprintln!("Error: {e}");
        return exit_code(&e);
    }

    let state = browser.state();
    if args.json {
        println!("{}", format_listing_json(state.current_path(), state.items()));
    } else if args.out.is_none() {
        print!("{}", format_listing_text(state.current_path(), state.items()));
    }
    written
}

fn handle_download(backend: Arc<dyn Backend>, args: &DownloadArgs) -> i32 {
    let browser = FileBrowser::new(backend);
    match browser.download(&args.path, Path::new(&args.dest)) {
        Ok(target) => {
            eprintln!("Saved: {}", target.display());
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code(&e)
        }
    }
}

fn handle_stats(backend: Arc<dyn Backend>, args: &StatsArgs) -> i32 {
    let mut page = Page::new();
    let mut dashboard = Dashboard::new(backend);

    let fetched = dashboard.fetch_statistics(&mut page);
    dashboard.update_uptimes_display(&mut page, now_millis());
    let written = write_out(args.out.as_ref(), &page);

    if let Err(e) = fetched {
        eprintln!("Error: {e}");
        return exit_code(&e);
    }

    let snapshot = dashboard.state().snapshot();
    match (args.json, snapshot) {
        (true, Some(s)) => println!("{}", format_stats_json(s)),
        _ if args.out.is_none() => print!("{}", format_dashboard_text(&page, snapshot)),
        _ => {}
    }
    written
}

fn handle_watch(backend: Arc<dyn Backend>, config: &Config, args: &WatchArgs) -> i32 {
    let mut options = WatchOptions::from_config(config);
    options.max_ticks = args.ticks;

    let mut watch = WatchLoop::new(Dashboard::new(backend), Page::new(), options);
    let result = match &args.out {
        Some(target) => watch.run(&mut PageFileSink::new(target)),
        None => watch.run(&mut StdoutSink),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code(&e)
        }
    }
}

fn handle_command(backend: Arc<dyn Backend>, start: bool) -> i32 {
    let mut page = Page::new();
    let dashboard = Dashboard::new(backend);
    let result = if start {
        dashboard.start_recording(&mut page)
    } else {
        dashboard.stop_recording(&mut page)
    };

    match result {
        Ok(_) => {
            println!("{}", page.text(ContainerId::RecordingStatus).unwrap_or_default());
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code(&e)
        }
    }
}

fn handle_cleanup(backend: Arc<dyn Backend>, args: &CleanupArgs) -> i32 {
    let mut page = Page::new();
    page.set_days_input(args.days.as_str());
    let dashboard = Dashboard::new(backend);

    let result = dashboard.send_cleanup(&mut page);
    let written = write_out(args.out.as_ref(), &page);
    println!("{}", page.text(ContainerId::CleanupStatus).unwrap_or_default());

    match result {
        Ok(_) => written,
        Err(e) => exit_code(&e),
    }
}

fn print_help() {
    println!("Recording console (recview) - Browse recordings and operate a recording appliance");
    println!();
    println!("USAGE:");
    println!("    recview [GLOBAL OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    browse [PATH]        List a recordings directory (root when PATH is omitted)");
    println!("    download <PATH>      Download a recording");
    println!("    stats                Show disk statistics and uptimes once");
    println!("    watch                Poll statistics and refresh uptimes continuously");
    println!("    record               Start recording");
    println!("    stop                 Stop recording");
    println!("    cleanup <DAYS>       Delete recordings older than DAYS days");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help             Show this help message");
    println!("    -v, --version          Show version information");
    println!("    --url <URL>            Appliance base URL (default: http://127.0.0.1:8002)");
    println!("    --config <FILE>        JSON config file");
    println!("    --timeout <S>          Request timeout in seconds (default: 10)");
    println!();
    println!("COMMAND OPTIONS:");
    println!("    --json                 browse, stats: emit machine-readable output");
    println!("    --out <FILE>           browse, stats, watch, cleanup: write the rendered page");
    println!("    --dest <DIR>           download: target directory (default: .)");
    println!("    --ticks <N>            watch: stop after N uptime refreshes");
    println!();
    println!("ENVIRONMENT:");
    println!("    RECVIEW_URL            Appliance base URL (overridden by --url)");
    println!("    RUST_LOG               Log filter, e.g. RUST_LOG=debug");
    println!();
    println!("EXAMPLES:");
    println!("    recview browse 20250101 --url http://camera.local:8002");
    println!("    recview download 20250101/20250101T120000.mkv --dest ~/Videos");
    println!("    recview watch --out /tmp/dashboard.html");
    println!("    recview cleanup 7");
}
