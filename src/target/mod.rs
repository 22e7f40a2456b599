//! Rust → Zig target triple translation
//!
//! Rust spells targets as `arch-vendor-os[-abi]`, while `zig cc` expects
//! `arch-os[-abi]` with its own OS names. Translation is lossy and lenient:
//! the vendor is always dropped, and anything that does not look like a
//! triple is handed back unchanged (`native`, triples already in Zig form,
//! arbitrary strings).
//!
//! Translating twice is not a no-op. `x86_64-linux-gnu` reads as vendor
//! `linux` with OS `gnu` and becomes `x86_64-gnu`.

#![allow(dead_code)]

pub mod os_map;

pub use os_map::OsMap;

/// Zig OS name for bare-metal targets
const FREESTANDING: &str = "freestanding";

/// Zig OS name for WASI targets
const WASI: &str = "wasi";

/// Borrowed view of a hyphen-delimited target triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetTriple<'a> {
    /// CPU architecture, e.g. `x86_64`
    pub arch: &'a str,
    /// Toolchain vendor, e.g. `unknown`, `apple`, `pc`
    pub vendor: &'a str,
    /// Operating system, e.g. `linux`, `darwin`
    pub os: &'a str,
    /// Environment/ABI, e.g. `gnu`, `msvc`
    pub abi: Option<&'a str>,
}

impl<'a> TargetTriple<'a> {
    /// Split `triple` on `-`.
    ///
    /// Returns `None` when there are fewer than three fields. An empty
    /// fourth field counts as no ABI; fields past the fourth are ignored.
    pub fn parse(triple: &'a str) -> Option<Self> {
        let mut fields = triple.split('-');
        let arch = fields.next()?;
        let vendor = fields.next()?;
        let os = fields.next()?;
        let abi = fields.next().filter(|abi| !abi.is_empty());

        Some(Self {
            arch,
            vendor,
            os,
            abi,
        })
    }
}

/// Whether `arch` belongs to the 32-bit WebAssembly family
pub fn is_wasm32_arch(arch: &str) -> bool {
    arch.starts_with("wasm32")
}

/// Translates Rust target triples into Zig target triples
#[derive(Debug, Clone, Copy, Default)]
pub struct TripleTranslator {
    os_map: OsMap,
}

impl TripleTranslator {
    /// Create a translator over the given OS table
    pub fn new(os_map: OsMap) -> Self {
        Self { os_map }
    }

    /// Translate one triple. Never fails.
    pub fn translate(&self, triple: &str) -> String {
        let Some(parsed) = TargetTriple::parse(triple) else {
            return triple.to_string();
        };

        let os = self.os_map.resolve(parsed.os);

        // A wasm32 arch with any other OS falls through to the generic form
        if is_wasm32_arch(parsed.arch) {
            match os {
                FREESTANDING => return "wasm32-freestanding".to_string(),
                WASI => return "wasm32-wasi".to_string(),
                _ => {}
            }
        }

        let mut zig_target = format!("{}-{}", parsed.arch, os);
        if let Some(abi) = parsed.abi {
            zig_target.push('-');
            zig_target.push_str(abi);
        }
        zig_target
    }
}

/// Translate with the default OS table
pub fn translate(triple: &str) -> String {
    TripleTranslator::default().translate(triple)
}
