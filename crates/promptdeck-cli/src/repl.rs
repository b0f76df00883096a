/// One line typed at the interactive prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Help,
    Presets,
    Use(String),
    Preview(String),
    Prompt(String),
    Temperature(f64),
    MaxTokens(i64),
    TopP(f64),
    Show,
    Generate,
    Clear,
    Quit,
}

pub fn parse(line: &str) -> Result<Option<ReplCommand>, String> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    // Only the line terminator and the single separator after the command
    // are removed; `raw` is what the user typed after them.
    let line = line.trim_start().trim_end_matches(['\n', '\r']);
    let (cmd, raw) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = raw.trim();

    let command = match cmd.to_lowercase().as_str() {
        "help" | "h" | "?" => ReplCommand::Help,
        "presets" | "p" => ReplCommand::Presets,
        "use" | "u" => ReplCommand::Use(required(rest, "use <#|label>")?),
        "preview" | "v" => ReplCommand::Preview(required(rest, "preview <#|label>")?),
        // Prompt text is kept verbatim, including an empty value to clear it.
        "prompt" => ReplCommand::Prompt(raw.to_string()),
        "temperature" | "temp" | "t" => ReplCommand::Temperature(number(rest, "temperature")?),
        "max-tokens" | "max" | "m" => ReplCommand::MaxTokens(number(rest, "max-tokens")?),
        "top-p" | "topp" => ReplCommand::TopP(number(rest, "top-p")?),
        "show" | "s" => ReplCommand::Show,
        "generate" | "gen" | "g" => ReplCommand::Generate,
        "clear" | "cls" => ReplCommand::Clear,
        "exit" | "quit" | "q" => ReplCommand::Quit,
        other => {
            return Err(format!(
                "Unknown command: {}. Type 'help' for available commands.",
                other
            ))
        }
    };

    Ok(Some(command))
}

fn required(arg: &str, usage: &str) -> Result<String, String> {
    if arg.is_empty() {
        return Err(format!("Usage: {}", usage));
    }
    Ok(arg.to_string())
}

fn number<T: std::str::FromStr>(arg: &str, name: &str) -> Result<T, String> {
    arg.parse()
        .map_err(|_| format!("Invalid {} value: {:?}", name, arg))
}
