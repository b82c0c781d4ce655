//! The static "edit profile" detail block.

use serde::{Deserialize, Serialize};

/// Fixed profile fields shown in the edit-profile overlay for *any*
/// selected record. The overlay never reads these from the record itself;
/// the block is process-wide configuration injected into the renderer at
/// construction.
///
/// Deserialises with per-field defaults so a config file may override any
/// subset of the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDetails {
  pub job:       String,
  pub mobile:    String,
  pub skill:     String,
  pub education: String,
  pub address:   String,
}

impl Default for ProfileDetails {
  fn default() -> Self {
    Self {
      job:       "Software Engineer".into(),
      mobile:    "123-456-7890".into(),
      skill:     "React, JavaScript, HTML, CSS".into(),
      education: "Bachelor of Science in Computer Science".into(),
      address:   "123 Main St, City, Country".into(),
    }
  }
}

impl ProfileDetails {
  /// `(label, value)` pairs in display order.
  pub fn fields(&self) -> [(&'static str, &str); 5] {
    [
      ("Job", self.job.as_str()),
      ("Mobile", self.mobile.as_str()),
      ("Skill", self.skill.as_str()),
      ("Education", self.education.as_str()),
      ("Address", self.address.as_str()),
    ]
  }
}
