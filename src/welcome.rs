use std::env;
use tracing::info;

pub fn welcome() {

    let version = env!("CARGO_PKG_VERSION");
    let run_mode = env::var("CRUDUI_MODE").unwrap_or_else(|_| "development".into());

    let title = [
        r"  ____  ____   _   _  ____   _   _  ___ ",
        r" / ___||  _ \ | | | ||  _ \ | | | ||_ _|",
        r"| |    | |_) || | | || | | || | | | | | ",
        r"| |___ |  _ < | |_| || |_| || |_| | | | ",
        r" \____||_| \_\ \___/ |____/  \___/ |___|",
    ];
    for line in title {
        println!("{}", line);
    }
    println!();
    println!("Version: {} | Run-Mode: {}", version, run_mode);
    println!();
    info!("Starting up crudui in {run_mode} mode.");
}
