// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_note(repeats: usize) -> String {
    let base = "# Shopping\n\nWeekly run, **before** Friday.\n- [ ] milk\n- [x] *eggs*\n- bread\nSee [prices](https://shop.example/p) first.\n![receipt](r.png)\nRun `sync` after.\n```let total = a * b;```\n> __keep__ the ~~old~~ receipt\n---\n";
    base.repeat(repeats)
}

#[allow(dead_code)]
pub fn generate_long_line(words: usize) -> String {
    let word = "plain **bold** *it* __u__ ~~s~~ ";
    word.repeat(words)
}

/// Line indices of every unchecked item in a generated note
#[allow(dead_code)]
pub fn checklist_line_indices(note: &str) -> Vec<usize> {
    note.split('\n')
        .enumerate()
        .filter(|(_, line)| line.starts_with("- ["))
        .map(|(i, _)| i)
        .collect()
}
