use std::io::{self, IsTerminal, Write};

use colored::Colorize;

use crate::core::domain::Verdict;

pub fn write_verdict<W: Write>(w: &mut W, verdict: &Verdict) -> io::Result<()> {
    match verdict {
        Verdict::Accepted { timings } => {
            writeln!(w, "{}", "OK".green().bold())?;
            if let Some(timings) = timings {
                writeln!(w, "Average Executing Time:")?;
                for timing in timings {
                    writeln!(w, "Test #{}: {:?}", timing.test_number, timing.average)?;
                }
            }
        }
        Verdict::WrongAnswer {
            test_number,
            input,
            output,
            answer,
            lines_mask,
        } => {
            writeln!(
                w,
                "{}",
                format!("Wrong answer at test #{}", test_number).red().bold()
            )?;
            writeln!(w, "Input:\n{}\n", input)?;

            writeln!(w, "Output:")?;
            for (idx, line) in output.split('\n').enumerate() {
                if lines_mask.get(idx).copied().unwrap_or(false) {
                    writeln!(w, "{}", line.green().bold())?;
                } else {
                    writeln!(w, "{}", line.red().bold())?;
                }
            }
            writeln!(w)?;

            writeln!(w, "Answer:\n{}", answer)?;
        }
    }
    Ok(())
}

pub fn success(msg: &str) {
    println!("{}", msg.green().bold());
}

/// Prints an error line on stderr, styled only when stderr itself is a
/// terminal.
pub fn failure(msg: &str) {
    let stderr = io::stderr();
    let colorize = stderr.is_terminal() && std::env::var_os("NO_COLOR").is_none();
    let _ = write_failure(&mut stderr.lock(), msg, colorize);
}

fn write_failure<W: Write>(w: &mut W, msg: &str, colorize: bool) -> io::Result<()> {
    if !colorize {
        return writeln!(w, "{}", msg);
    }

    // `colored` only looks at stdout when deciding whether to style.
    colored::control::set_override(true);
    let result = writeln!(w, "{}", msg.red().bold());
    colored::control::unset_override();
    result
}

#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use std::time::Duration;

    use super::*;
    use crate::core::domain::TestTiming;

    // Styling override is process-wide.
    static STYLING: Mutex<()> = Mutex::new(());

    fn styled() -> MutexGuard<'static, ()> {
        let guard = STYLING.lock().unwrap_or_else(|e| e.into_inner());
        colored::control::set_override(true);
        guard
    }

    fn render(verdict: &Verdict) -> String {
        let mut buf = Vec::new();
        write_verdict(&mut buf, verdict).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_accepted() {
        let text = render(&Verdict::Accepted { timings: None });

        assert!(text.contains("OK"));
        assert!(!text.contains("Average Executing Time"));
    }

    #[test]
    fn test_accepted_with_timings() {
        let text = render(&Verdict::Accepted {
            timings: Some(vec![
                TestTiming {
                    test_number: 1,
                    average: Duration::from_millis(12),
                },
                TestTiming {
                    test_number: 2,
                    average: Duration::from_micros(1500),
                },
            ]),
        });

        assert!(text.contains("Average Executing Time:\n"));
        assert!(text.contains("Test #1: 12ms\n"));
        assert!(text.contains("Test #2: 1.5ms\n"));
    }

    #[test]
    fn test_wrong_answer_with_extra_output_lines() {
        let _styled = styled();
        let text = render(&Verdict::WrongAnswer {
            test_number: 3,
            input: "2\n1 2".to_string(),
            output: "3\n4\n5".to_string(),
            answer: "3\n7".to_string(),
            lines_mask: vec![true, false],
        });

        assert!(text.contains("Wrong answer at test #3"));
        assert!(text.contains("Input:\n2\n1 2\n"));
        assert!(text.contains(&format!("Output:\n{}\n", "3".green().bold())));
        assert!(text.contains(&format!("\n{}\n", "4".red().bold())));
        assert!(text.contains(&format!("\n{}\n", "5".red().bold())));
        assert!(!text.contains(&"4".green().bold().to_string()));
        assert!(!text.contains(&"5".green().bold().to_string()));
        assert!(text.contains("Answer:\n3\n7\n"));
    }

    #[test]
    fn test_wrong_answer_mask_colors_each_line() {
        let _styled = styled();
        let text = render(&Verdict::WrongAnswer {
            test_number: 1,
            input: "3".to_string(),
            output: "a\nb\nc".to_string(),
            answer: "a\nx\nc".to_string(),
            lines_mask: vec![true, false, true],
        });

        let output: Vec<_> = text
            .split("Output:\n")
            .nth(1)
            .unwrap()
            .lines()
            .take(3)
            .map(str::to_string)
            .collect();
        assert_eq!(
            output,
            vec![
                "a".green().bold().to_string(),
                "b".red().bold().to_string(),
                "c".green().bold().to_string(),
            ]
        );
    }

    #[test]
    fn test_failure_plain_when_not_a_terminal() {
        let _styled = styled();
        let mut buf = Vec::new();

        write_failure(&mut buf, "error while compiling", false).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "error while compiling\n");
    }

    #[test]
    fn test_failure_styled_on_terminal() {
        let _guard = STYLING.lock().unwrap_or_else(|e| e.into_inner());
        colored::control::set_override(false);
        let mut buf = Vec::new();

        write_failure(&mut buf, "network error", true).unwrap();

        colored::control::set_override(true);
        let expected = format!("{}\n", "network error".red().bold());
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }
}
