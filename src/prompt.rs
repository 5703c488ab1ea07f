use std::io::{self, BufRead, Write};

// ---------------------------------------------------------------------------
// Console plumbing
// ---------------------------------------------------------------------------

/// Interpret one line of user input as a 1-based menu selection.
/// `None` for anything other than an integer in `[1, len]`.
pub fn parse_selection(line: &str, len: usize) -> Option<usize> {
    match line.trim().parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Some(n),
        _ => None,
    }
}

/// Prompt until the user enters a valid selection in `[1, len]`.
///
/// Invalid input is reported and re-prompted indefinitely. A closed stdin
/// counts as picking the last entry, which both menus reserve for exiting.
pub fn prompt_selection(prompt: &str, len: usize) -> io::Result<usize> {
    let stdin = io::stdin();
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(len);
        }
        match parse_selection(&line, len) {
            Some(choice) => return Ok(choice),
            None => {
                println!("Please pick a number from the choices.");
                pause()?;
            }
        }
    }
}

/// "Press enter to continue" acknowledgement.
pub fn pause() -> io::Result<()> {
    println!("Press enter to continue");
    let mut sink = String::new();
    io::stdin().lock().read_line(&mut sink)?;
    Ok(())
}

/// Clear the terminal with ANSI escapes rather than a full TUI stack.
pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = io::stdout().flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_index_in_range() {
        for n in 1..=5 {
            assert_eq!(parse_selection(&n.to_string(), 5), Some(n));
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("-1", 3), None);
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(parse_selection("abc", 3), None);
        assert_eq!(parse_selection("1.5", 3), None);
        assert_eq!(parse_selection("", 3), None);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(parse_selection(" 2 \n", 3), Some(2));
    }
}
