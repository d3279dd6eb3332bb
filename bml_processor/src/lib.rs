//! # BML Processor: FaceFX XML to SmartBody BML Viseme Scheduling
//!
//! This crate reads the XML timing exports written by FaceFX Studio and turns each
//! `<animation>` into a SmartBody BML document. Phoneme intervals are mapped onto a
//! smaller set of mouth shapes (visemes), word intervals become `<sync>` markers inside
//! `<speech>`, and curve data is passed through unchanged.
//!
//! The three steps are exposed as separate functions:
//! - [`parse_facefx`]: Streams a FaceFX XML string into `AnimationTimingSet` values.
//! - [`assign_visemes`]: Maps every phoneme of an animation through the selected table.
//! - [`generate_bml`]: Serializes one animation into a BML string.
//!
//! ## Examples
//!
//! ```rust
//! use bml_processor::{assign_visemes, generate_bml, parse_facefx};
//! use viseme_scheduler_core::{BmlGenerationOptions, FacefxParsingOptions, VisemeMapping};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let facefx_content = r#"
//!     <actor name="ChrMale001">
//!       <animation name="line1">
//!         <phonemes>
//!           <phoneme phoneme="SIL" start="0.000000" end="1.200000" />
//!         </phonemes>
//!         <words>
//!           <word start="1.200000" end="1.500000">Hi</word>
//!         </words>
//!         <curves>
//!           <curve name="WW" num_keys="1" owner="analysis">1.0 0.5 0.0 0.0 </curve>
//!         </curves>
//!       </animation>
//!     </actor>
//!     "#;
//!
//!     // An empty animation filter processes every animation in the file.
//!     let mut parsed = parse_facefx(facefx_content, &FacefxParsingOptions::default())?;
//!     assert_eq!(parsed.animations.len(), 1);
//!
//!     let animation = &mut parsed.animations[0];
//!     assert_eq!(animation.output_file.to_str(), Some("line1.bml.txt"));
//!     // Double-letter pose names are stored under their single-letter channel.
//!     assert_eq!(animation.raw_curves[0].name, "W");
//!
//!     assign_visemes(animation, VisemeMapping::Sbm2)?;
//!     let bml = generate_bml(animation, &BmlGenerationOptions::default())?;
//!
//!     assert!(bml.contains(r#"<lips viseme="_" articulation="1.0" start="0""#));
//!     assert!(bml.contains(r#"<sync id="T0" time="1.2"/>Hi"#));
//!     Ok(())
//! }
//! ```

pub mod generator;
pub mod mapper;
pub mod parser;

pub use generator::generate_bml;
pub use mapper::{assign_visemes, map_phoneme};
pub use parser::parse_facefx;
