//! The closed set of console commands.

/// A recognized console command.
///
/// The set is closed: there is no plugin or extension mechanism. `ls`/`dir`
/// and `exit`/`quit` are the only aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Ls,
    Whoami,
    Pwd,
    Uname,
    Ps,
    Netstat,
    Nmap,
    Exploit,
    Show,
    Use,
    Search,
    Version,
    Exit,
}

impl Command {
    /// Match an already-lowercased command name against the fixed set.
    /// Exact matches only; no prefix or fuzzy matching.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Self::Help),
            "clear" => Some(Self::Clear),
            "ls" | "dir" => Some(Self::Ls),
            "whoami" => Some(Self::Whoami),
            "pwd" => Some(Self::Pwd),
            "uname" => Some(Self::Uname),
            "ps" => Some(Self::Ps),
            "netstat" => Some(Self::Netstat),
            "nmap" => Some(Self::Nmap),
            "exploit" => Some(Self::Exploit),
            "show" => Some(Self::Show),
            "use" => Some(Self::Use),
            "search" => Some(Self::Search),
            "version" => Some(Self::Version),
            "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}
