//! `--help` output.

use crate::startup::config::{
    ENV_BASE_URL, ENV_LOG, ENV_PROBE_ADDR, ENV_PROBE_INTERVAL_SECS, ENV_SITE, ENV_TIMEOUT_SECS,
};

pub fn usage() -> String {
    format!(
        "\
stackq {version}
Search Stack Overflow questions from the terminal.

USAGE:
    stackq [OPTIONS]

OPTIONS:
    -h, --help       Print this help
    -V, --version    Print version

KEYS:
    Enter            Search (three or more characters)
    Up/Down          Select a result
    Tab, Ctrl+O      Show the selected question
    o, Enter         Open the question in the browser (in the detail view)
    Esc              Close the detail view
    Ctrl+C           Quit

ENVIRONMENT:
    {ENV_BASE_URL:<28}API root
    {ENV_SITE:<28}Community to search
    {ENV_TIMEOUT_SECS:<28}Request timeout in seconds
    {ENV_PROBE_ADDR:<28}host:port used for the connectivity probe
    {ENV_PROBE_INTERVAL_SECS:<28}Seconds between probes
    {ENV_LOG:<28}Log filter (written to the cache directory)
",
        version = super::VERSION,
    )
}

pub fn handle_help_command() -> ! {
    print!("{}", usage());
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_lists_flags_and_env() {
        let text = usage();
        assert!(text.contains("--version"));
        assert!(text.contains("--help"));
        assert!(text.contains("STACKQ_SITE"));
        assert!(text.contains("STACKQ_PROBE_INTERVAL_SECS"));
    }
}
