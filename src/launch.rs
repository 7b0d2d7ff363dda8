//! Building the argument list for the user's "open note" command.
//!
//! The command is a template such as `gedit --new-window {fn}`. Fields in
//! braces are replaced by values; the note path is appended when the
//! template does not mention `{fn}`.

/// Placeholder for the note path in open-command templates.
pub const PATH_FIELD: &str = "fn";

/// Splits a command line on spaces. Double-quoted groups stay one argument
/// (quotes removed, inner spaces kept). Escaped quotes are not supported.
pub fn split_args(cmd: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut rest = cmd.trim();

    while !rest.is_empty() {
        match quoted_group(rest) {
            Some((start, end)) => {
                push_unquoted(&rest[..start], &mut args);
                args.push(rest[start..end].trim_matches('"').to_string());
                rest = &rest[end..];
            }
            None => {
                push_unquoted(rest, &mut args);
                break;
            }
        }
    }

    args
}

/// Byte range of the first `"…"` group holding at least one character.
fn quoted_group(s: &str) -> Option<(usize, usize)> {
    let open = s.find('"')?;
    let first = s[open + 1..].chars().next()?;
    let body = open + 1 + first.len_utf8();
    let close = body + s[body..].find('"')?;
    Some((open, close + 1))
}

fn push_unquoted(chunk: &str, args: &mut Vec<String>) {
    args.extend(chunk.split(' ').filter(|a| !a.is_empty()).map(str::to_owned));
}

/// Expands `{field}` placeholders in each argument of `cmd`.
///
/// If `append_missing` names a field that no argument uses, that field's
/// value is added as the last argument. Placeholders without a value are
/// left untouched.
pub fn build_args(cmd: &str, fields: &[(&str, &str)], append_missing: Option<&str>) -> Vec<String> {
    let mut used = false;
    let mut args: Vec<String> = split_args(cmd)
        .into_iter()
        .map(|arg| {
            if let Some(name) = append_missing {
                used |= arg.contains(&format!("{{{name}}}"));
            }
            fields.iter().fold(arg, |acc, (name, value)| {
                acc.replace(&format!("{{{name}}}"), value)
            })
        })
        .collect();

    if let Some(name) = append_missing.filter(|_| !used) {
        if let Some((_, value)) = fields.iter().find(|(field, _)| *field == name) {
            args.push((*value).to_string());
        }
    }

    args
}

/// Arguments for opening the note at `path` with the `cmd` template.
pub fn open_note_args(cmd: &str, path: &str) -> Vec<String> {
    build_args(cmd, &[(PATH_FIELD, path)], Some(PATH_FIELD))
}
