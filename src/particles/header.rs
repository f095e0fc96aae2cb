//! Header line of a particle dump
//!
//! The simulator opens every dump with `"<num_particles> <num_iters> <flag>"`.
//! Rendering never depends on it; it is only used to warn when the
//! command-line counts disagree with what the simulator recorded.

/// Counts recorded by the simulator in the first line of the dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetHeader {
    pub num_particles: usize,
    pub num_iters: usize,
}

impl DatasetHeader {
    /// Recognise a header consisting of at least two unsigned integers.
    ///
    /// Anything else (free text, floats) is treated as an opaque header.
    pub fn parse(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            return None;
        }
        if !tokens.iter().all(|t| t.parse::<i64>().is_ok()) {
            return None;
        }

        let num_particles = tokens[0].parse::<usize>().ok()?;
        let num_iters = tokens[1].parse::<usize>().ok()?;
        Some(Self {
            num_particles,
            num_iters,
        })
    }

    /// True when the recorded counts match the requested ones
    pub fn agrees_with(&self, num_particles: usize, num_iters: usize) -> bool {
        self.num_particles == num_particles && self.num_iters == num_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simulator_header() {
        let header = DatasetHeader::parse("3000 200 0").unwrap();
        assert_eq!(header.num_particles, 3000);
        assert_eq!(header.num_iters, 200);
        assert!(header.agrees_with(3000, 200));
        assert!(!header.agrees_with(3000, 100));
    }

    #[test]
    fn test_parse_two_token_header() {
        assert_eq!(
            DatasetHeader::parse("  10 5 "),
            Some(DatasetHeader {
                num_particles: 10,
                num_iters: 5
            })
        );
    }

    #[test]
    fn test_opaque_headers() {
        assert_eq!(DatasetHeader::parse(""), None);
        assert_eq!(DatasetHeader::parse("x y"), None);
        assert_eq!(DatasetHeader::parse("1.5 2.5"), None);
        assert_eq!(DatasetHeader::parse("42"), None);
        assert_eq!(DatasetHeader::parse("-1 5 0"), None);
    }
}
