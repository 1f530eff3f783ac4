mod sample_data_synthesizer;

pub use sample_data_synthesizer::SampleDataSynthesizer;
