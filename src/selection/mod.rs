pub mod budgeting;
pub mod guard;
pub mod noise;
pub mod ranking;
pub mod region;
pub mod title;

use tracing::{debug, instrument};

use crate::config::{ConfigError, ExtractorConfig};
use crate::document::markup::{decode_input, NormalizedMarkup, TagStripper};
use crate::document::Document;
use crate::types::{
	Degradation, EmptyReason, Extraction, ExtractionReport, ExtractionResult, RegionSource,
	SelectionTier,
};
pub use budgeting::{assemble_excerpt, ExcerptBudget};
pub use guard::{Cancellation, NeverCancelled, StageGuard};
pub use noise::NoiseSuppressor;
pub use ranking::{
	rank_sentences, split_sentences, LexicalScorer, RankedSentences, SelectionPolicy, Sentence,
	SentenceScorer, SentenceSignals,
};
pub use region::{select_region, RegionCandidate, RegionSelection};
pub use title::{resolve_title, ResolvedTitle};

/// The extraction pipeline: normalize, resolve title, select region,
/// suppress noise, rank sentences, assemble.
///
/// Immutable after construction; one instance can serve many threads as long
/// as the scorer is `Sync`. Every call parses its own tree.
pub struct ContentExtractor<S = LexicalScorer> {
	config: ExtractorConfig,
	scorer: S,
	noise: NoiseSuppressor,
	stripper: TagStripper,
	residual_tags: Vec<String>,
}

impl ContentExtractor<LexicalScorer> {
	pub fn new(config: ExtractorConfig) -> Result<Self, ConfigError> {
		let scorer = LexicalScorer::new(&config.newsworthy_lexicon)?;
		Self::with_scorer(config, scorer)
	}
}

impl<S> ContentExtractor<S>
where
	S: SentenceScorer,
{
	pub fn with_scorer(config: ExtractorConfig, scorer: S) -> Result<Self, ConfigError> {
		config.validate()?;

		let noise = NoiseSuppressor::new(&config.boilerplate_lexicon)?;
		let stripper = TagStripper::new()?;
		let residual_tags = config
			.noise_tags
			.iter()
			.chain(config.fallback_noise_tags.iter())
			.cloned()
			.collect();

		Ok(Self {
			config,
			scorer,
			noise,
			stripper,
			residual_tags,
		})
	}

	pub fn config(&self) -> &ExtractorConfig {
		&self.config
	}

	pub fn extract(&self, document: &Document) -> ExtractionResult {
		self.extract_with(document, &NeverCancelled)
	}

	/// Run the pipeline once. Never fails: every degradation is absorbed and
	/// reported, and exhaustion of all fallbacks yields `Extraction::Empty`.
	#[instrument(skip_all, fields(url = %document.url.as_str()))]
	pub fn extract_with(&self, document: &Document, cancel: &dyn Cancellation) -> ExtractionResult {
		let guard = StageGuard::start(self.config.max_processing_ms, cancel);

		let mut report = ExtractionReport {
			url: document.url.clone(),
			source_version: document.version.clone(),
			input_bytes: document.raw.len(),
			degradations: Vec::new(),
			region: RegionSource::NotReached,
			title_hint: None,
			sentences_considered: 0,
			sentences_salient: 0,
			sentences_selected: 0,
			tier: SelectionTier::Nothing,
		};

		// 0. Bound and decode the input
		let decoded = decode_input(&document.raw, self.config.max_input_bytes);
		if decoded.truncated {
			report.degradations.push(Degradation::InputTruncated);
		}
		if decoded.lossy {
			report.degradations.push(Degradation::InvalidUtf8);
		}
		if decoded.text.trim().is_empty() {
			return empty(report, EmptyReason::NoUsableText);
		}

		// 1-3. Normalize, resolve the title, select the region
		let (title, region_text) = if document.is_markup() {
			match NormalizedMarkup::parse(&decoded.text, &self.config.noise_tags) {
				Some(mut markup) => {
					if let Some(reason) = guard.interrupted() {
						return empty(report, reason);
					}

					let title = resolve_title(
						markup.root(),
						&self.config.title_hints,
						self.config.min_title_chars,
						self.config.max_title_chars,
					);
					report.title_hint = title.as_ref().map(|t| t.hint.clone());

					if let Some(reason) = guard.interrupted() {
						return empty(report, reason);
					}

					let region = select_region(
						&mut markup,
						&self.config.region_hints,
						self.config.min_region_chars,
						&self.residual_tags,
					);
					let text = match region {
						RegionSelection::Hinted(candidate) => {
							report.region = RegionSource::Hint {
								priority: candidate.priority,
								hint: candidate.hint,
							};
							candidate.text
						}
						RegionSelection::Body(text) => {
							report.region = RegionSource::DocumentBody;
							report.degradations.push(Degradation::NoRegionFound);
							text
						}
					};

					(title.map(|t| t.text).unwrap_or_default(), text)
				}
				None => {
					debug!("no usable tree; stripping tags");
					report.region = RegionSource::StrippedMarkup;
					report.degradations.push(Degradation::ParseDegraded);
					(String::new(), self.stripper.strip(&decoded.text))
				}
			}
		} else {
			report.region = RegionSource::PlainText;
			(String::new(), decoded.text)
		};

		if let Some(reason) = guard.interrupted() {
			return empty(report, reason);
		}

		// 4. Noise suppression
		let cleaned = self.noise.clean(&region_text);
		debug!(region_chars = region_text.len(), cleaned_chars = cleaned.len(), "region cleaned");

		if let Some(reason) = guard.interrupted() {
			return empty(report, reason);
		}

		// 5. Salience ranking
		let policy = SelectionPolicy {
			min_sentence_chars: self.config.min_sentence_chars,
			max_salient: self.config.max_salient_sentences,
			fallback_count: self.config.fallback_sentence_count,
		};
		let ranked = rank_sentences(&self.scorer, &cleaned, &policy);

		report.sentences_considered = ranked.considered;
		report.sentences_salient = ranked.salient;
		report.sentences_selected = ranked.selected.len();
		report.tier = ranked.tier;

		match ranked.tier {
			SelectionTier::Nothing => return empty(report, EmptyReason::NoUsableText),
			SelectionTier::Leading => report.degradations.push(Degradation::NoSalientContent),
			SelectionTier::Salient => {}
		}

		if let Some(reason) = guard.interrupted() {
			return empty(report, reason);
		}

		// 6. Assembly under the excerpt budget
		let budget = ExcerptBudget {
			max_chars: self.config.max_excerpt_chars,
			marker: &self.config.truncation_marker,
		};
		let content = assemble_excerpt(&title, &ranked.joined(), &budget);
		debug!(
			body_chars = content.body.chars().count(),
			truncated = content.truncated,
			selected = report.sentences_selected,
			"excerpt assembled"
		);

		ExtractionResult {
			extraction: Extraction::Extracted(content),
			report,
		}
	}
}

fn empty(report: ExtractionReport, reason: EmptyReason) -> ExtractionResult {
	debug!(%reason, degradations = report.degradations.len(), "nothing extracted");
	ExtractionResult {
		extraction: Extraction::Empty { reason },
		report,
	}
}
