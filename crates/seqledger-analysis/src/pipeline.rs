//! Pipeline: runs the registered transforms over one input sequence.
//!
//! The pipeline holds labeled transform strategies, not names to branch on.
//! Every transform runs against the same immutable input; no transform sees
//! another's output. The first transform error aborts the whole run.

use std::sync::Arc;

use crate::codon::CodonTable;
use crate::error::AnalysisError;
use crate::report::{AnalysisReport, TransformOutput};
use crate::sequence::Sequence;
use crate::transforms::{
    BaseCount, Complement, GcContent, ReverseComplement, Transcription, Transform, Translation,
};

struct Step {
    label: String,
    transform: Box<dyn Transform>,
}

/// An ordered set of labeled transforms.
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// An empty pipeline. Add analyses with [`Pipeline::with`].
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Register a transform under an analysis label.
    pub fn with(mut self, label: impl Into<String>, transform: impl Transform + 'static) -> Self {
        self.steps.push(Step {
            label: label.into(),
            transform: Box::new(transform),
        });
        self
    }

    /// The standard six analyses over a shared codon table.
    pub fn standard(table: Arc<CodonTable>) -> Self {
        Self::new()
            .with("complement", Complement)
            .with("reverse_complement", ReverseComplement)
            .with("transcription", Transcription)
            .with("translation", Translation::new(table))
            .with("gc_content", GcContent)
            .with("base_counts", BaseCount)
    }

    /// The registered analysis labels, in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.label.as_str())
    }

    /// Run every transform over the sequence and assemble the report.
    ///
    /// The report also carries the input itself under the `sequence` label,
    /// so a record is self-describing. Errors propagate; no partial report
    /// is ever returned.
    pub fn run(&self, seq: &Sequence) -> Result<AnalysisReport, AnalysisError> {
        let mut report = AnalysisReport::new();
        report.insert("sequence", TransformOutput::Sequence(seq.to_string()));
        for step in &self.steps {
            let output =
                step.transform
                    .apply(seq)
                    .map_err(|source| AnalysisError::Transform {
                        label: step.label.clone(),
                        source,
                    })?;
            report.insert(step.label.clone(), output);
        }
        Ok(report)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
