use std::io::{self, BufRead, Write};

pub(crate) const INPUT_FILE_PROMPT: &str = "Please specify the name of the input file, including its extension (such as .txt, .pdf, .xml, etc.): ";
pub(crate) const SURNAME_PROMPT: &str = "Enter your surname: ";

/// Prints `message` without a newline and reads one answer line.
pub(crate) fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        ));
    }

    Ok(answer.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prints_prompt_and_strips_line_ending() {
        let mut input = Cursor::new("names list.txt\r\n");
        let mut output = Vec::new();
        let answer = ask(&mut input, &mut output, SURNAME_PROMPT).expect("answer read");
        assert_eq!(answer, "names list.txt");
        assert_eq!(String::from_utf8(output).expect("utf8"), SURNAME_PROMPT);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = ask(&mut input, &mut output, INPUT_FILE_PROMPT).expect_err("eof");
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
