//! Conversion of many independent inputs.
//!
//! Each input gets its own pipeline (cursor, grid, output buffer); nothing
//! is shared between them, so with the `parallel` feature they are simply
//! spread over rayon's thread pool.

use super::convert::convert_bytes;
use super::formats::delimited::CsvConfig;
use super::formats::sylk::SylkConfig;
use crate::sheet::Result as SheetResult;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of converting one named input.
#[derive(Debug)]
pub struct BatchOutcome {
    pub name: String,
    pub result: SheetResult<Vec<u8>>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Convert every `(name, bytes)` input. Outcomes are returned in input
/// order; one input failing does not affect the others.
pub fn convert_batch<N, B>(inputs: &[(N, B)], sylk: &SylkConfig, csv: &CsvConfig) -> Vec<BatchOutcome>
where
    N: AsRef<str> + Sync,
    B: AsRef<[u8]> + Sync,
{
    let convert_one = |(name, bytes): &(N, B)| {
        let name = name.as_ref();
        let result = convert_bytes(bytes.as_ref(), sylk, csv);
        match &result {
            Ok(out) => tracing::info!(name, bytes = out.len(), "converted"),
            Err(err) => tracing::error!(name, error = %err, "conversion failed"),
        }
        BatchOutcome {
            name: name.to_string(),
            result,
        }
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<BatchOutcome> = inputs.par_iter().map(convert_one).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<BatchOutcome> = inputs.iter().map(convert_one).collect();

    let failed = outcomes.iter().filter(|outcome| !outcome.is_ok()).count();
    tracing::info!(inputs = outcomes.len(), failed, "batch finished");
    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::text::formats::sylk::ParseErrorKind;

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let inputs = vec![
            ("units.slk", "C;Y1;X1;K\"unitID\"\nC;X2;K\"sort\"\n".as_bytes()),
            ("broken.slk", "C;Y0;X1;K1\n".as_bytes()),
            ("items.slk", "C;Y2;X1;KTRUE\n".as_bytes()),
        ];
        let outcomes = convert_batch(&inputs, &SylkConfig::default(), &CsvConfig::default());

        let names: Vec<&str> = outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["units.slk", "broken.slk", "items.slk"]);
        let ok: Vec<bool> = outcomes.iter().map(BatchOutcome::is_ok).collect();
        assert_eq!(ok, vec![true, false, true]);

        assert_eq!(outcomes[0].result.as_ref().unwrap(), b"unitID,sort\n");
        let err = outcomes[1].result.as_ref().unwrap_err();
        assert_eq!(err.as_parse_error().unwrap().kind, ParseErrorKind::InvalidCoordinate);
        assert_eq!(outcomes[2].result.as_ref().unwrap(), b"\nTRUE\n");
    }

    #[test]
    fn test_cursor_state_is_per_input() {
        // The second input omits coordinates; it must start from (1, 1)
        // rather than where the first input's cursor ended.
        let inputs = vec![("a", "C;Y3;X3;K1\n"), ("b", "C;K2\n")];
        let outcomes = convert_batch(&inputs, &SylkConfig::default(), &CsvConfig::default());
        assert_eq!(outcomes[1].result.as_ref().unwrap(), b"2\n");
    }
}
