use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use dashgrid::config::load_config;
use dashgrid::renderer::Renderer;
use dashgrid::ui::core::style::Attr;
use dashgrid::{DashboardConfig, Result, TermUi};

mod logging;

fn main() -> ExitCode {
    let mut config_path: Option<PathBuf> = None;
    let mut debug = false;
    for arg in std::env::args().skip(1) {
        if let Some(value) = arg.strip_prefix("--config=") {
            config_path = Some(PathBuf::from(value));
        } else if arg == "--debug" {
            debug = true;
        } else {
            eprintln!("usage: dashgrid [--config=<path>] [--debug]");
            return ExitCode::from(2);
        }
    }

    match run(config_path, debug) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dashgrid: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<PathBuf>, debug: bool) -> Result<()> {
    let mut config = match config_path {
        Some(path) => load_config(&path)?,
        None => DashboardConfig::default(),
    };
    config.debug |= debug;

    let _logging = logging::init(config.debug);
    let quit_key = config.quit_key.clone();

    let mut ui = TermUi::new(config)?;
    ui.key_quit(&quit_key)?;
    build(&mut ui)?;
    ui.render()?;

    ui.run_loop_with(|ui| {
        ui.reset();
        build(ui)?;
        ui.render()
    })?;
    ui.close()
}

/// Sample dashboard: a title, two text boxes, two charts and a table.
fn build<R: Renderer>(ui: &mut TermUi<R>) -> Result<()> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    ui.title("dashgrid", Attr::CYAN.0, Attr::WHITE.0, true, 3, 12);

    ui.text_box(&format!("uptime tick {}", now % 3600), Attr::GREEN.0, Attr::WHITE.0, "clock", 3);
    ui.add_col(6);
    ui.text_box("press q to quit", Attr::YELLOW.0, Attr::WHITE.0, "help", 3);
    ui.add_col(6);
    ui.add_row()?;

    let labels: Vec<String> = ["mon", "tue", "wed", "thu", "fri"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let seed = (now % 7) as i64;
    let data: Vec<i64> = (0..5).map(|i| (i * 3 + seed) % 10 + 1).collect();
    ui.bar_chart(
        &data,
        &labels,
        "visits",
        Attr::WHITE.0,
        Attr::WHITE.0,
        Attr::BLACK.0,
        10,
        1,
        4,
        Attr::BLUE.0,
    );
    ui.add_col(6);

    let mut stacked: [Vec<i64>; 8] = Default::default();
    stacked[0] = data.iter().map(|v| v / 2 + 1).collect();
    stacked[1] = data.iter().map(|v| 10 - v).collect();
    ui.stacked_bar_chart(
        stacked,
        &labels,
        "sources",
        Attr::WHITE.0,
        Attr::WHITE.0,
        Attr::BLACK.0,
        10,
        1,
        4,
    );
    ui.add_col(6);
    ui.add_row()?;

    let rows = vec![
        vec!["page".to_string(), "views".to_string()],
        vec!["/".to_string(), data[0].to_string()],
        vec!["/docs".to_string(), data[1].to_string()],
    ];
    ui.table(rows, "top pages", Attr::WHITE.0, Attr::WHITE.0);
    ui.add_col(12);
    ui.add_row()
}
