//! The command interpreter: parse, dispatch, canned responses.
//!
//! `execute` is pure with respect to timers: it returns every line the
//! command produces, with delayed output described as a [`Deferred`] block
//! for the caller to schedule. This keeps dispatch testable without a
//! runtime and lets the app decide how (or whether) to cancel in-flight
//! emissions.

use std::time::Duration;

use super::command::Command;
use super::history::History;
use super::output::OutputLine;

/// Prompt prefix echoed in front of every submitted command.
pub const PROMPT: &str = "msf6 > ";

const HELP_TEXT: [&str; 17] = [
    "Available Commands:",
    "  help          - Show this help message",
    "  clear         - Clear console output",
    "  ls/dir        - List directory contents",
    "  whoami        - Show current user",
    "  pwd           - Show current directory",
    "  uname         - Show system information",
    "  ps            - Show running processes",
    "  netstat       - Show network connections",
    "  nmap [target] - Network scan",
    "  exploit       - Load exploit framework",
    "  show [type]   - Show exploits/payloads",
    "  use [exploit] - Select exploit",
    "  search [term] - Search exploits",
    "  version       - Show version info",
    "  exit/quit     - Exit console",
    "",
];

const DIR_LISTING: [&str; 8] = [
    "drwxr-xr-x  2 root root  4096 Nov 30 12:00 exploits",
    "drwxr-xr-x  2 root root  4096 Nov 30 12:00 payloads",
    "drwxr-xr-x  2 root root  4096 Nov 30 12:00 auxiliary",
    "drwxr-xr-x  2 root root  4096 Nov 30 12:00 encoders",
    "drwxr-xr-x  2 root root  4096 Nov 30 12:00 nops",
    "-rw-r--r--  1 root root  1024 Nov 30 12:00 msfconsole",
    "-rw-r--r--  1 root root  2048 Nov 30 12:00 msfvenom",
    "-rw-r--r--  1 root root   512 Nov 30 12:00 README.md",
];

const PROCESS_TABLE: [&str; 8] = [
    "PID    COMMAND",
    "1      systemd",
    "2      kthreadd",
    "1337   msfconsole",
    "1338   postgresql",
    "1339   apache2",
    "1340   ssh",
    "1341   metasploit",
];

const NETSTAT_TABLE: [&str; 6] = [
    "Active Internet connections:",
    "Proto Recv-Q Send-Q Local Address           Foreign Address         State",
    "tcp        0      0 0.0.0.0:22              0.0.0.0:*               LISTEN",
    "tcp        0      0 0.0.0.0:80              0.0.0.0:*               LISTEN",
    "tcp        0      0 0.0.0.0:443             0.0.0.0:*               LISTEN",
    "tcp        0      0 127.0.0.1:5432          0.0.0.0:*               LISTEN",
];

const EXPLOIT_LIST: [&str; 9] = [
    "Available Exploits:",
    "  windows/smb/ms17_010_eternalblue",
    "  linux/http/apache_mod_cgi_bash_env_exec",
    "  windows/http/iis_webdav_scstoragepathfromurl",
    "  multi/handler",
    "  windows/local/ms16_032_secondary_logon_handle_privesc",
    "  linux/local/dirty_cow",
    "  windows/browser/ms13_009_ie_slayoutrun_uaf",
    "  android/adb/adb_server_exec",
];

const PAYLOAD_LIST: [&str; 9] = [
    "Available Payloads:",
    "  windows/meterpreter/reverse_tcp",
    "  linux/x86/meterpreter/reverse_tcp",
    "  windows/shell/reverse_tcp",
    "  linux/x86/shell/reverse_tcp",
    "  windows/meterpreter/bind_tcp",
    "  android/meterpreter/reverse_tcp",
    "  java/meterpreter/reverse_tcp",
    "  php/meterpreter/reverse_tcp",
];

const NMAP_DELAY: Duration = Duration::from_millis(2000);
const EXPLOIT_DELAY: Duration = Duration::from_millis(1000);
const SEARCH_DELAY: Duration = Duration::from_millis(1000);

/// A block of output to emit after a fixed simulated delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred {
    pub delay: Duration,
    pub lines: Vec<OutputLine>,
}

/// Everything a single `execute` call produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// Lines to append to the sink immediately, echo first.
    pub lines: Vec<OutputLine>,
    /// Whether the sink should be reset to the banner after the immediate
    /// lines are applied (the `clear` command).
    pub clear: bool,
    /// At most one delayed block per command.
    pub deferred: Option<Deferred>,
}

impl Response {
    fn push(&mut self, text: impl Into<String>) {
        self.lines.push(OutputLine::output(text));
    }

    fn push_all(&mut self, lines: &[&str]) {
        self.lines.extend(lines.iter().copied().map(OutputLine::output));
    }

    /// Apply the immediate part of the response to a transcript: append the
    /// echoed command and output lines, then honor `clear`. The deferred
    /// block is the caller's job to schedule.
    pub fn apply_immediate(&self, transcript: &mut super::output::Transcript) {
        transcript.extend(self.lines.iter().cloned());
        if self.clear {
            transcript.reset_to_banner();
        }
    }
}

/// Session-scoped command interpreter.
///
/// Owns the command history; holds no reference to the display sink or the
/// timer queue, so multiple independent consoles can coexist.
#[derive(Debug, Default)]
pub struct Interpreter {
    history: History,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute one submitted line. The caller guarantees `line` is trimmed
    /// and non-empty; empty input never reaches the interpreter.
    ///
    /// Every call echoes the prompt + raw input first, appends the line to
    /// history, and never fails: usage messages and the unknown-command
    /// fallback are ordinary output lines.
    pub fn execute(&mut self, line: &str) -> Response {
        self.history.record(line);

        let mut resp = Response {
            lines: vec![OutputLine::command(format!("{PROMPT}{line}"))],
            ..Response::default()
        };

        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or("").to_ascii_lowercase();
        let args: Vec<&str> = tokens.collect();

        match Command::parse(&name) {
            Some(cmd) => self.dispatch(cmd, &args, &mut resp),
            None => {
                resp.push(format!("Command not found: {line}"));
                resp.push("Type \"help\" for available commands.");
            }
        }
        resp
    }

    fn dispatch(&self, cmd: Command, args: &[&str], resp: &mut Response) {
        match cmd {
            Command::Help => resp.push_all(&HELP_TEXT),
            Command::Clear => resp.clear = true,
            Command::Ls => resp.push_all(&DIR_LISTING),
            Command::Whoami => resp.push("ShadowHall@MetaSploit"),
            Command::Pwd => resp.push("/opt/metasploit-framework"),
            Command::Uname => resp.push(
                "Linux MetaSploit 5.15.0-kali3-amd64 #1 SMP Debian 5.15.15-2kali1 \
                 x86_64 GNU/Linux",
            ),
            Command::Ps => resp.push_all(&PROCESS_TABLE),
            Command::Netstat => resp.push_all(&NETSTAT_TABLE),
            Command::Nmap => {
                if args.is_empty() {
                    resp.push("Usage: nmap [target]");
                } else {
                    let target = args.join(" ");
                    resp.push(format!("Starting Nmap scan on {target}..."));
                    resp.deferred = Some(Deferred {
                        delay: NMAP_DELAY,
                        lines: nmap_report(&target),
                    });
                }
            }
            Command::Exploit => {
                resp.push("Starting exploit framework...");
                resp.deferred = Some(Deferred {
                    delay: EXPLOIT_DELAY,
                    lines: vec![OutputLine::output(
                        "Exploit framework loaded. Use \"show exploits\" to list \
                         available exploits.",
                    )],
                });
            }
            // The sub-command is matched with its original case, as the
            // framework this imitates does.
            Command::Show => match args.first().copied() {
                Some("exploits") => resp.push_all(&EXPLOIT_LIST),
                Some("payloads") => resp.push_all(&PAYLOAD_LIST),
                _ => resp.push("Usage: show [exploits|payloads]"),
            },
            Command::Use => {
                if args.is_empty() {
                    resp.push("Usage: use [exploit_path]");
                } else {
                    resp.push(format!("Using exploit: {}", args.join(" ")));
                    resp.push("Exploit loaded. Use \"show options\" to configure.");
                }
            }
            Command::Search => {
                if args.is_empty() {
                    resp.push("Usage: search [term]");
                } else {
                    let term = args.join(" ");
                    resp.push(format!("Searching for exploits containing '{term}'..."));
                    resp.deferred = Some(Deferred {
                        delay: SEARCH_DELAY,
                        lines: search_results(&term),
                    });
                }
            }
            Command::Version => {
                resp.push("MetaSploit Framework Console v6.3.47-dev");
                resp.push("Developed by ShadowHall, Malstrike & Team");
            }
            Command::Exit => resp.push("Goodbye!"),
        }
    }

    /// Recall the previous history entry, or `None` at the oldest one.
    pub fn recall_previous(&mut self) -> Option<String> {
        self.history.recall_previous().map(str::to_string)
    }

    /// Recall the next history entry; empty string past the newest.
    pub fn recall_next(&mut self) -> String {
        self.history.recall_next().to_string()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

fn nmap_report(target: &str) -> Vec<OutputLine> {
    let mut lines = vec![OutputLine::output(format!("Nmap scan report for {target}"))];
    lines.extend(
        [
            "Host is up (0.0012s latency).",
            "PORT     STATE SERVICE",
            "22/tcp   open  ssh",
            "80/tcp   open  http",
            "443/tcp  open  https",
            "3389/tcp open  ms-wbt-server",
            "",
            "Nmap done: 1 IP address (1 host up) scanned in 2.34 seconds",
        ]
        .into_iter()
        .map(OutputLine::output),
    );
    lines
}

fn search_results(term: &str) -> Vec<OutputLine> {
    let mut lines = vec![OutputLine::output(format!("Search results for '{term}':"))];
    lines.extend(
        [
            "  exploit/windows/smb/ms17_010_eternalblue",
            "  exploit/multi/handler",
            "  auxiliary/scanner/smb/smb_version",
            "  post/windows/gather/enum_shares",
        ]
        .into_iter()
        .map(OutputLine::output),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::output::{LineKind, Transcript, BANNER};

    fn texts(resp: &Response) -> Vec<&str> {
        resp.lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn every_command_echoes_prompt_and_input_first() {
        let mut interp = Interpreter::new();
        for input in ["help", "nmap 10.0.0.1", "garbage input here"] {
            let resp = interp.execute(input);
            assert_eq!(resp.lines[0].text, format!("msf6 > {input}"));
            assert_eq!(resp.lines[0].kind, LineKind::Command);
        }
    }

    #[test]
    fn command_name_is_case_insensitive() {
        let mut a = Interpreter::new();
        let mut b = Interpreter::new();
        let upper = a.execute("HELP");
        let lower = b.execute("help");
        // Echo differs by case, the produced output must not.
        assert_eq!(upper.lines[1..], lower.lines[1..]);
        assert_eq!(upper.clear, lower.clear);
        assert_eq!(upper.deferred, lower.deferred);
    }

    #[test]
    fn help_is_the_fixed_text() {
        let mut interp = Interpreter::new();
        let resp = interp.execute("help");
        assert_eq!(resp.lines.len(), 1 + HELP_TEXT.len());
        assert_eq!(texts(&resp)[1], "Available Commands:");
        assert_eq!(texts(&resp)[texts(&resp).len() - 1], "");
    }

    #[test]
    fn nmap_without_target_is_usage_only() {
        let mut interp = Interpreter::new();
        let resp = interp.execute("nmap");
        assert_eq!(texts(&resp), vec!["msf6 > nmap", "Usage: nmap [target]"]);
        assert!(resp.deferred.is_none());
    }

    #[test]
    fn nmap_with_target_defers_the_report() {
        let mut interp = Interpreter::new();
        let resp = interp.execute("nmap 10.0.0.1");
        assert_eq!(
            texts(&resp),
            vec!["msf6 > nmap 10.0.0.1", "Starting Nmap scan on 10.0.0.1..."]
        );
        let deferred = resp.deferred.unwrap();
        assert_eq!(deferred.delay, Duration::from_millis(2000));
        assert_eq!(deferred.lines.len(), 9);
        assert_eq!(deferred.lines[0].text, "Nmap scan report for 10.0.0.1");
        assert_eq!(
            deferred.lines[8].text,
            "Nmap done: 1 IP address (1 host up) scanned in 2.34 seconds"
        );
    }

    #[test]
    fn nmap_target_keeps_original_case() {
        let mut interp = Interpreter::new();
        let resp = interp.execute("NMAP ScanMe.Example.Com");
        assert_eq!(resp.lines[1].text, "Starting Nmap scan on ScanMe.Example.Com...");
    }

    #[test]
    fn exploit_defers_one_line() {
        let mut interp = Interpreter::new();
        let resp = interp.execute("exploit");
        assert_eq!(resp.lines[1].text, "Starting exploit framework...");
        let deferred = resp.deferred.unwrap();
        assert_eq!(deferred.delay, Duration::from_millis(1000));
        assert_eq!(deferred.lines.len(), 1);
    }

    #[test]
    fn show_requires_known_subcommand() {
        let mut interp = Interpreter::new();
        assert_eq!(
            interp.execute("show exploits").lines[1].text,
            "Available Exploits:"
        );
        assert_eq!(
            interp.execute("show payloads").lines[1].text,
            "Available Payloads:"
        );
        assert_eq!(
            interp.execute("show").lines[1].text,
            "Usage: show [exploits|payloads]"
        );
        // Sub-command case is significant, unlike the command name.
        assert_eq!(
            interp.execute("show EXPLOITS").lines[1].text,
            "Usage: show [exploits|payloads]"
        );
    }

    #[test]
    fn use_echoes_joined_args() {
        let mut interp = Interpreter::new();
        let resp = interp.execute("use windows/smb/ms17_010_eternalblue");
        assert_eq!(
            texts(&resp)[1..],
            [
                "Using exploit: windows/smb/ms17_010_eternalblue",
                "Exploit loaded. Use \"show options\" to configure.",
            ]
        );
        assert_eq!(interp.execute("use").lines[1].text, "Usage: use [exploit_path]");
    }

    #[test]
    fn search_defers_result_block() {
        let mut interp = Interpreter::new();
        let resp = interp.execute("search smb");
        assert_eq!(
            resp.lines[1].text,
            "Searching for exploits containing 'smb'..."
        );
        let deferred = resp.deferred.unwrap();
        assert_eq!(deferred.delay, Duration::from_millis(1000));
        assert_eq!(deferred.lines[0].text, "Search results for 'smb':");
        assert_eq!(deferred.lines.len(), 5);
        assert_eq!(
            interp.execute("search").lines[1].text,
            "Usage: search [term]"
        );
    }

    #[test]
    fn unknown_command_is_two_lines_with_raw_input() {
        let mut interp = Interpreter::new();
        let resp = interp.execute("xyz123");
        assert_eq!(
            texts(&resp),
            vec![
                "msf6 > xyz123",
                "Command not found: xyz123",
                "Type \"help\" for available commands.",
            ]
        );
    }

    #[test]
    fn clear_resets_transcript_to_banner() {
        let mut interp = Interpreter::new();
        let mut t = Transcript::new();
        interp.execute("whoami").apply_immediate(&mut t);
        assert!(t.len() > BANNER.len());
        interp.execute("clear").apply_immediate(&mut t);
        let texts: Vec<&str> = t.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, BANNER.to_vec());
    }

    #[test]
    fn whoami_is_idempotent() {
        let mut interp = Interpreter::new();
        for _ in 0..3 {
            let resp = interp.execute("whoami");
            assert_eq!(
                texts(&resp),
                vec!["msf6 > whoami", "ShadowHall@MetaSploit"]
            );
        }
        assert_eq!(interp.history().len(), 3);
    }

    #[test]
    fn exit_and_quit_are_cosmetic() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.execute("exit").lines[1].text, "Goodbye!");
        assert_eq!(interp.execute("quit").lines[1].text, "Goodbye!");
    }

    #[test]
    fn history_recall_round_trip() {
        let mut interp = Interpreter::new();
        interp.execute("a");
        interp.execute("b");
        interp.execute("c");
        assert_eq!(interp.recall_previous().as_deref(), Some("c"));
        assert_eq!(interp.recall_previous().as_deref(), Some("b"));
        assert_eq!(interp.recall_previous().as_deref(), Some("a"));
        assert_eq!(interp.recall_next(), "b");
    }

    #[test]
    fn fixed_tables_have_expected_shapes() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.execute("ls").lines.len(), 1 + 8);
        assert_eq!(interp.execute("dir").lines.len(), 1 + 8);
        assert_eq!(interp.execute("ps").lines.len(), 1 + 8);
        assert_eq!(interp.execute("netstat").lines.len(), 1 + 6);
        assert_eq!(interp.execute("version").lines.len(), 1 + 2);
        assert_eq!(interp.execute("pwd").lines.len(), 1 + 1);
        assert_eq!(interp.execute("uname").lines.len(), 1 + 1);
    }
}
