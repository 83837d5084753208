use kotoba_config::Config;
use kotoba_core::preprocess::{NormalizingPreprocessor, Passthrough, Preprocessor};
use kotoba_lang_japanese::JapaneseProcessor;

/// How responses are written back to the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub normalize: bool,
    pub pretty: bool,
}

pub struct AppState {
    pub config: Config,
    pub processor: JapaneseProcessor,
    pub preprocessor: Box<dyn Preprocessor + Send + Sync>,
    pub pretty: bool,
}

impl AppState {
    /// Loads dictionaries; the tokenizer is started separately
    pub fn new(config: Config, output: OutputOptions) -> Self {
        let processor = JapaneseProcessor::from_config(&config.dictionary);
        Self::with_processor(config, processor, output)
    }

    pub fn with_processor(config: Config, processor: JapaneseProcessor, output: OutputOptions) -> Self {
        let preprocessor: Box<dyn Preprocessor + Send + Sync> = if output.normalize {
            Box::new(NormalizingPreprocessor)
        } else {
            Box::new(Passthrough)
        };

        Self {
            config,
            processor,
            preprocessor,
            pretty: output.pretty,
        }
    }
}
