use anyhow::{anyhow, Context, Result};

pub const GLIDER: &str = "#N Glider\nx = 3, y = 3, rule = B3/S23\nbob$2bo$3o!\n";
pub const BLINKER: &str = "#N Blinker\nx = 3, y = 1, rule = B3/S23\n3o!\n";
pub const BLOCK: &str = "#N Block\nx = 2, y = 2, rule = B3/S23\n2o$2o!\n";

/// Live cells of a parsed pattern, relative to its bounding box.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pattern {
    width: usize,
    height: usize,
    alive: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(row, col)` pairs of live cells in row-major order.
    pub fn alive(&self) -> &[(usize, usize)] {
        &self.alive
    }

    /// Parses the RLE format (`#` comment lines, `x = .., y = ..` header,
    /// `b`/`o`/`$`/`!` body with optional run counts).
    pub fn from_rle(data: &str) -> Result<Self> {
        let mut lines = data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let header = lines.next().ok_or_else(|| anyhow!("RLE header is missing"))?;
        let (width, height) = parse_header(header)?;

        let mut alive = Vec::new();
        let (mut row, mut col) = (0usize, 0usize);
        let mut cnt: Option<usize> = None;
        'body: for line in lines {
            for ch in line.chars() {
                match ch {
                    '0'..='9' => {
                        let digit = ch as usize - '0' as usize;
                        cnt = Some(
                            cnt.unwrap_or(0)
                                .checked_mul(10)
                                .and_then(|c| c.checked_add(digit))
                                .ok_or_else(|| anyhow!("RLE run count overflows"))?,
                        );
                    }
                    'o' => {
                        let end = advance(col, cnt.take())?;
                        if end > width || row >= height {
                            return Err(anyhow!(
                                "RLE cells exceed the declared {width}x{height} box at row {row}"
                            ));
                        }
                        alive.extend((col..end).map(|c| (row, c)));
                        col = end;
                    }
                    'b' => {
                        col = advance(col, cnt.take())?;
                        if col > width {
                            return Err(anyhow!("RLE row {row} is wider than {width}"));
                        }
                    }
                    '$' => {
                        row = advance(row, cnt.take())?;
                        col = 0;
                    }
                    '!' => break 'body,
                    c if c.is_whitespace() => {}
                    c => return Err(anyhow!("Unexpected symbol {c:?} in RLE body")),
                }
            }
        }

        Ok(Self {
            width,
            height,
            alive,
        })
    }
}

fn advance(pos: usize, cnt: Option<usize>) -> Result<usize> {
    pos.checked_add(cnt.unwrap_or(1))
        .ok_or_else(|| anyhow!("RLE run count overflows"))
}

/// Rule strings meaning B3/S23, in the `Bx/Sy` and `S/B` notations.
fn is_conway_rule(rule: &str) -> bool {
    matches!(rule.to_ascii_uppercase().as_str(), "B3/S23" | "23/3")
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let mut width = None;
    let mut height = None;
    for item in line.split(',') {
        let Some((key, value)) = item.split_once('=') else {
            continue;
        };
        let parse = || {
            value
                .trim()
                .parse::<usize>()
                .with_context(|| format!("Bad value in RLE header: {line:?}"))
        };
        match key.trim() {
            "x" => width = Some(parse()?),
            "y" => height = Some(parse()?),
            "rule" if !is_conway_rule(value.trim()) => {
                return Err(anyhow!(
                    "Unsupported rule {:?}, only B3/S23 is simulated",
                    value.trim()
                ));
            }
            _ => {}
        }
    }
    match (width, height) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(anyhow!("RLE header must declare x and y: {line:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_patterns() {
        let glider = Pattern::from_rle(GLIDER).unwrap();
        assert_eq!((glider.width(), glider.height()), (3, 3));
        assert_eq!(glider.alive(), &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);

        let blinker = Pattern::from_rle(BLINKER).unwrap();
        assert_eq!(blinker.alive(), &[(0, 0), (0, 1), (0, 2)]);

        let block = Pattern::from_rle(BLOCK).unwrap();
        assert_eq!(block.alive(), &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn multiline_body_and_row_skips() {
        let rle = "x = 4, y = 4\n2o\n2b$\n2$3bo!";
        let pattern = Pattern::from_rle(rle).unwrap();
        assert_eq!(pattern.alive(), &[(0, 0), (0, 1), (3, 3)]);
    }

    #[test]
    fn malformed_input() {
        assert!(Pattern::from_rle("").is_err());
        assert!(Pattern::from_rle("#C only a comment\n").is_err());
        assert!(Pattern::from_rle("x = 2\n2o!").is_err());
        assert!(Pattern::from_rle("x = 2, y = 1\n3o!").is_err());
        assert!(Pattern::from_rle("x = 2, y = 1\nzz!").is_err());
    }

    #[test]
    fn huge_run_counts_are_errors() {
        for body in [
            "o18446744073709551615o!",
            "ob18446744073709551615b!",
            "$18446744073709551615$o!",
            "99999999999999999999o!",
        ] {
            let rle = format!("x = 2, y = 1\n{body}");
            assert!(Pattern::from_rle(&rle).is_err(), "{body}");
        }
    }

    #[test]
    fn only_conway_rule_is_accepted() {
        assert!(Pattern::from_rle("x = 1, y = 1, rule = b3/s23\no!").is_ok());
        assert!(Pattern::from_rle("x = 1, y = 1, rule = 23/3\no!").is_ok());
        assert!(Pattern::from_rle("x = 1, y = 1\no!").is_ok());

        let err = Pattern::from_rle("x = 1, y = 1, rule = B36/S23\no!").unwrap_err();
        assert!(err.to_string().contains("B36/S23"), "{err}");
    }
}
