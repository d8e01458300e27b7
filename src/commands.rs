//! CLI Command Handlers
//!
//! Each handler takes CLI args, the preference store and Output, and
//! returns an ExitCode. Anything written goes through the same store and
//! rules as the TUI.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::{
    AddCmd, AddResult, ExitCode, Output, PickCmd, PickResult, SetCmd, SettingsReport, ShowCmd,
    SpinCmd, SpinResult,
};
use crate::models::{AddOutcome, AppSettings, CustomPromptSet, Mode, WHEEL_IDEAS};
use crate::prefs::PreferenceStore;
use crate::ui::wheel::SPIN_TURNS;

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Flush pending writes, mapping failure to an error exit
fn flush(store: &mut dyn PreferenceStore, output: &Output) -> Result<(), ExitCode> {
    store
        .flush()
        .map_err(|e| output.error(format!("Failed to save preferences: {}", e), ExitCode::Error))
}

fn finish<T: serde::Serialize>(output: &Output, data: T, human: impl std::fmt::Display) -> ExitCode {
    match output.print(data, human) {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

// =============================================================================
// Spin Command
// =============================================================================

pub fn spin_cmd(cmd: SpinCmd, output: &Output) -> ExitCode {
    use rand::Rng;

    let mut rng = rng_for(cmd.seed);
    let turns = rng.gen_range(SPIN_TURNS);
    let idea = WHEEL_IDEAS[rng.gen_range(0..WHEEL_IDEAS.len())].to_string();

    let human = format!("🎡 {}", idea);
    finish(output, SpinResult { idea, turns }, human)
}

// =============================================================================
// Truth / Dare Commands
// =============================================================================

pub fn pick_cmd(cmd: PickCmd, store: &dyn PreferenceStore, output: &Output) -> ExitCode {
    let mode = Mode::from(cmd.mode);
    let customs = CustomPromptSet::load(store);
    let prompt = customs.pick(mode, &mut rng_for(cmd.seed));

    let human = format!("{}: {}", mode.label(), prompt);
    finish(output, PickResult { mode, prompt }, human)
}

pub fn add_cmd(cmd: AddCmd, store: &mut dyn PreferenceStore, output: &Output) -> ExitCode {
    let mode = Mode::from(cmd.mode);
    let mut customs = CustomPromptSet::load(store);

    let added = match customs.add(mode, &cmd.text) {
        AddOutcome::Added(text) => text,
        AddOutcome::Blank => {
            return output.error(format!("{} cannot be empty", mode.label()), ExitCode::InvalidArgs)
        }
        AddOutcome::Duplicate => {
            return output.error(
                format!("{} already exists: {}", mode.label(), cmd.text.trim()),
                ExitCode::InvalidArgs,
            )
        }
    };

    customs.persist(store);
    if let Err(code) = flush(store, output) {
        return code;
    }
    log::info!("Added custom {} from CLI: {}", mode, added);

    let total = customs.list(mode).len();
    let human = format!("Ditambahkan ({} {} milikmu): {}", total, mode.label(), added);
    finish(output, AddResult { mode, added, total }, human)
}

// =============================================================================
// Settings Commands
// =============================================================================

fn report(settings: &AppSettings, customs: &CustomPromptSet) -> SettingsReport {
    SettingsReport {
        left_name: settings.left_name.clone(),
        right_name: settings.right_name.clone(),
        accent_index: settings.accent_index,
        greeting: settings.greeting(),
        custom_truths: customs.truths.clone(),
        custom_dares: customs.dares.clone(),
    }
}

fn format_report(report: &SettingsReport) -> String {
    let mut out = format!(
        "{}\nNama kiri:   {}\nNama kanan:  {}\nWarna aksen: {}",
        report.greeting, report.left_name, report.right_name, report.accent_index
    );
    for (title, items) in [("Truth", &report.custom_truths), ("Dare", &report.custom_dares)] {
        out.push_str(&format!("\n{} kamu ({}):", title, items.len()));
        for item in items {
            out.push_str(&format!("\n  • {}", item));
        }
    }
    out
}

pub fn show_cmd(_cmd: ShowCmd, store: &dyn PreferenceStore, output: &Output) -> ExitCode {
    let settings = AppSettings::load(store);
    let customs = CustomPromptSet::load(store);

    let report = report(&settings, &customs);
    let human = format_report(&report);
    finish(output, report, human)
}

pub fn set_cmd(cmd: SetCmd, store: &mut dyn PreferenceStore, output: &Output) -> ExitCode {
    if cmd.is_empty() {
        return output.error("Nothing to set (use --left, --right or --accent)", ExitCode::InvalidArgs);
    }

    let mut settings = AppSettings::load(store);
    if let Some(left) = cmd.left {
        settings.left_name = left;
    }
    if let Some(right) = cmd.right {
        settings.right_name = right;
    }
    if let Some(accent) = cmd.accent {
        settings.accent_index = accent;
    }

    settings.persist(store);
    if let Err(code) = flush(store, output) {
        return code;
    }
    log::info!("Settings saved from CLI: {:?}", settings);
    output.info("Tersimpan ♥");

    let report = report(&settings, &CustomPromptSet::load(store));
    let human = format_report(&report);
    finish(output, report, human)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ModeArg;
    use crate::prefs::MemoryPreferences;

    fn quiet() -> Output {
        Output { json: true, quiet: true }
    }

    #[test]
    fn test_add_then_pick_sees_custom() {
        let mut store = MemoryPreferences::new();
        let cmd = AddCmd {
            mode: ModeArg::Dare,
            text: "  Nyanyikan lagu favoritku ".into(),
        };
        assert_eq!(add_cmd(cmd, &mut store, &quiet()), ExitCode::Success);

        let customs = CustomPromptSet::load(&store);
        assert_eq!(customs.dares, vec!["Nyanyikan lagu favoritku"]);
        assert!(customs.truths.is_empty());
    }

    #[test]
    fn test_add_rejects_blank_and_duplicate() {
        let mut store = MemoryPreferences::new();
        let add = |text: &str| AddCmd {
            mode: ModeArg::Truth,
            text: text.into(),
        };

        assert_eq!(add_cmd(add("   "), &mut store, &quiet()), ExitCode::InvalidArgs);
        assert!(store.is_empty());

        assert_eq!(add_cmd(add("Sama"), &mut store, &quiet()), ExitCode::Success);
        assert_eq!(add_cmd(add(" Sama "), &mut store, &quiet()), ExitCode::InvalidArgs);
        assert_eq!(CustomPromptSet::load(&store).truths, vec!["Sama"]);
    }

    #[test]
    fn test_set_updates_only_given_fields() {
        let mut store = MemoryPreferences::new();
        AppSettings::new("Budi", "Sari", 1).persist(&mut store);

        let cmd = SetCmd {
            left: None,
            right: Some("Rina".into()),
            accent: Some(4),
        };
        assert_eq!(set_cmd(cmd, &mut store, &quiet()), ExitCode::Success);
        assert_eq!(AppSettings::load(&store), AppSettings::new("Budi", "Rina", 4));
    }

    #[test]
    fn test_set_without_fields_is_invalid() {
        let mut store = MemoryPreferences::new();
        let cmd = SetCmd {
            left: None,
            right: None,
            accent: None,
        };
        assert_eq!(set_cmd(cmd, &mut store, &quiet()), ExitCode::InvalidArgs);
        assert!(store.is_empty());
    }

    #[test]
    fn test_report_lists_customs() {
        let mut customs = CustomPromptSet::new();
        customs.add(Mode::Truth, "Satu");
        let report = report(&AppSettings::default(), &customs);

        assert_eq!(report.greeting, "Hai Aku ❤ Kamu!");
        let text = format_report(&report);
        assert!(text.contains("Truth kamu (1):"));
        assert!(text.contains("• Satu"));
        assert!(text.contains("Dare kamu (0):"));
    }

    #[test]
    fn test_seeded_pick_is_repeatable() {
        let mut a = rng_for(Some(3));
        let mut b = rng_for(Some(3));
        let customs = CustomPromptSet::new();
        assert_eq!(customs.pick(Mode::Dare, &mut a), customs.pick(Mode::Dare, &mut b));
    }
}
