/// Split a completion into the commands to run, in order.
///
/// Each line is trimmed; lines that are blank after trimming are dropped.
/// Nothing else is normalized - shell validity is the model's job.
pub fn extract_commands(completion: &str) -> Vec<String> {
    completion
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
