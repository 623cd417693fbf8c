pub use anyhow::{ensure, Context as _, Result};
pub use bbox::{prelude::*, PixelBox, TLBR};
pub use image::{Rgb, RgbImage};
pub use log::{debug, info, warn};
pub use noisy_float::prelude::*;
pub use rand::prelude::*;
pub use serde::{Deserialize, Serialize};
pub use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
};
