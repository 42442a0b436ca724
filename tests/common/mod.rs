use forth::mach::Runtime;

/// Runs each line in a fresh session and returns the display text of every line.
pub fn exec(lines: &[&str]) -> Vec<String> {
    let mut runtime = Runtime::default();
    exec_in(&mut runtime, lines)
}

pub fn exec_in(runtime: &mut Runtime, lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| runtime.execute_line(line)).collect()
}

pub fn stack(runtime: &Runtime) -> String {
    runtime.stack().render()
}
