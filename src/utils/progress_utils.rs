use indicatif::ProgressBar;

/// Progress bar shown while per-player history fetches are in flight.
pub fn progress_bar(len: u64, msg: &'static str) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>4}/{len:4} {msg}")
            .unwrap()
            .progress_chars("##-")
    );
    bar.set_message(msg);

    bar
}
