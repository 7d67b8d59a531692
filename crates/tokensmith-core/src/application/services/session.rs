//! Token Session - the main application orchestrator.
//!
//! A session owns everything that outlives a single generation call:
//! 1. The token tree, accumulated across steps and recipes
//! 2. The name context used for collision handling
//! 3. The color cache
//!
//! Each `add_*` call validates its step, generates values, names them and
//! stores them as one leaf namespace. Nothing is stored when a step fails.

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::ArtifactSink,
        recipe::{
            ColorRampStep, ColorStopsStep, FontFamiliesStep, MidpointStep, PresetStep, Recipe,
            RecipeStep, ScaleStep, ShadowStep, TextStylesStep,
        },
    },
    domain::{
        Algorithm, ArtifactFormat, CanonicalSerializer, ColorCache, ColorMixer, CompositeValue,
        DomainError, DomainValidator as validator, NameAssigner, NameContext, NameTarget,
        NamedToken, Naming, Preset, RawValue, ScaleGenerator, ScalePoint, ScaleSpec, Token,
        TokenTree, TokenType, elide_midpoint, entities::reference_path, shadow::box_shadow,
    },
    error::TokensmithResult,
};

/// Mix percentages used when a color step leaves them out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDefaults {
    pub min_mix: f64,
    pub max_mix: f64,
}

impl Default for ColorDefaults {
    fn default() -> Self {
        Self {
            min_mix: 10.0,
            max_mix: 90.0,
        }
    }
}

/// What one step stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inserted {
    pub path: Vec<String>,
    /// Final leaf name, after collision handling (`card` → `card-inner`).
    pub leaf: String,
    /// Stop names in generation order.
    pub stops: Vec<String>,
}

impl Inserted {
    /// Dotted path of the stored namespace.
    pub fn node(&self) -> String {
        node_path(&self.path.join("."), &self.leaf)
    }
}

/// The identity of one batch of tokens.
struct Batch<'a> {
    path: &'a [String],
    name: &'a str,
    token_type: TokenType,
    variant: Option<&'a str>,
    description: Option<&'a str>,
}

/// Accumulates generated tokens and renders them.
pub struct TokenSession {
    id: Uuid,
    tree: TokenTree,
    names: NameContext,
    mixer: ColorMixer,
    serializer: CanonicalSerializer,
    color_defaults: ColorDefaults,
}

impl Default for TokenSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            tree: TokenTree::new(),
            names: NameContext::new(),
            mixer: ColorMixer::new(),
            serializer: CanonicalSerializer::new(),
            color_defaults: ColorDefaults::default(),
        }
    }

    pub fn with_color_defaults(mut self, defaults: ColorDefaults) -> Self {
        self.color_defaults = defaults;
        self
    }

    pub fn with_serializer(mut self, serializer: CanonicalSerializer) -> Self {
        self.serializer = serializer;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Read-only view for previews.
    pub fn tree(&self) -> &TokenTree {
        &self.tree
    }

    pub fn names(&self) -> &NameContext {
        &self.names
    }

    pub fn color_cache(&self) -> &ColorCache {
        self.mixer.cache()
    }

    /// Drop memoized colors. Output is unaffected.
    pub fn clear_caches(&mut self) {
        debug!(entries = self.mixer.cache().len(), "Clearing color cache");
        self.mixer.clear_cache();
    }

    /// Start over with an empty tree, name context and cache.
    pub fn reset(&mut self) {
        self.tree = TokenTree::new();
        self.names.clear();
        self.mixer.clear_cache();
        info!(session = %self.id, "Session reset");
    }

    // -------------------------------------------------------------------------
    // Recipes
    // -------------------------------------------------------------------------

    /// Validate `recipe` and run its steps in order.
    ///
    /// Steps before a failing one stay stored.
    #[instrument(skip_all, fields(session = %self.id, recipe = %recipe.name))]
    pub fn apply(&mut self, recipe: &Recipe) -> TokensmithResult<Vec<Inserted>> {
        recipe.validate()?;
        info!(steps = recipe.steps.len(), "Applying recipe");

        let inserted = recipe
            .steps
            .iter()
            .map(|step| self.apply_step(step))
            .collect::<TokensmithResult<Vec<_>>>()?;

        info!(leaves = self.tree.leaf_count(), "Recipe applied");
        Ok(inserted)
    }

    pub fn apply_step(&mut self, step: &RecipeStep) -> TokensmithResult<Inserted> {
        debug!(kind = step.kind(), "Running step");
        match step {
            RecipeStep::ColorRamp(s) => self.add_color_ramp(s),
            RecipeStep::ColorStops(s) => self.add_color_stops(s),
            RecipeStep::Scale(s) => self.add_scale(s),
            RecipeStep::FontWeights(s) => self.add_preset(Preset::FontWeight, s),
            RecipeStep::LineHeights(s) => self.add_preset(Preset::LineHeight, s),
            RecipeStep::LetterSpacings(s) => self.add_preset(Preset::LetterSpacing, s),
            RecipeStep::FontFamilies(s) => self.add_font_families(s),
            RecipeStep::Shadow(s) => self.add_shadow(s),
            RecipeStep::TextStyles(s) => self.add_text_styles(s),
        }
    }

    // -------------------------------------------------------------------------
    // Generation
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(session = %self.id, name = %step.name, algorithm = %step.algorithm))]
    pub fn add_scale(&mut self, step: &ScaleStep) -> TokensmithResult<Inserted> {
        validator::validate_path(&step.path, &step.name)?;
        let spec = step.spec()?;
        let points = ScaleGenerator::points(&spec)?;
        debug!(count = points.len(), "Scale generated");

        let batch = Batch {
            path: &step.path,
            name: &step.name,
            token_type: step.token_type,
            variant: step.variant.as_deref(),
            description: step.description.as_deref(),
        };
        let unit = spec.unit();
        self.commit_points(
            &batch,
            &points,
            &step.naming,
            step.midpoint.as_ref(),
            |raw| raw.render(unit),
        )
    }

    #[instrument(skip_all, fields(session = %self.id, name = %step.name, base = %step.base))]
    pub fn add_color_ramp(&mut self, step: &ColorRampStep) -> TokensmithResult<Inserted> {
        validator::validate_path(&step.path, &step.name)?;
        let base = self.mixer.parse(&step.base)?;
        let (min_mix, max_mix) = self.mix_range(step.min_mix, step.max_mix);
        let colors = self.mixer.ramp(base, step.count, min_mix, max_mix)?;
        debug!(count = colors.len(), min_mix, max_mix, "Ramp generated");

        let batch = Batch {
            path: &step.path,
            name: &step.name,
            token_type: TokenType::Color,
            variant: None,
            description: step.description.as_deref(),
        };
        self.commit_points(&batch, &ScalePoint::colors(colors), &step.naming, None, |raw| {
            raw.render(None)
        })
    }

    #[instrument(skip_all, fields(session = %self.id, name = %step.name, base = %step.base))]
    pub fn add_color_stops(&mut self, step: &ColorStopsStep) -> TokensmithResult<Inserted> {
        validator::validate_path(&step.path, &step.name)?;
        let base = self.mixer.parse(&step.base)?;
        let (min_mix, max_mix) = self.mix_range(step.min_mix, step.max_mix);
        let stops = self
            .mixer
            .semantic_stops(base, step.variations, min_mix, max_mix)?;
        debug!(count = stops.len(), "Semantic stops generated");

        let tokens = stops
            .into_iter()
            .map(|(label, color)| {
                let token = describe(Token::new(color.to_string(), TokenType::Color), step.description.as_deref());
                NamedToken::new(label, token)
            })
            .collect();
        let batch = Batch {
            path: &step.path,
            name: &step.name,
            token_type: TokenType::Color,
            variant: None,
            description: None,
        };
        self.commit_tokens(&batch, tokens)
    }

    /// Store entries of a fixed preset table, optionally a named subset.
    #[instrument(skip_all, fields(session = %self.id, name = %step.name, preset = %preset))]
    pub fn add_preset(&mut self, preset: Preset, step: &PresetStep) -> TokensmithResult<Inserted> {
        validator::validate_path(&step.path, &step.name)?;
        let tokens = preset.tokens(step.names.as_deref())?;
        let batch = Batch {
            path: &step.path,
            name: &step.name,
            token_type: preset.token_type(),
            variant: None,
            description: None,
        };
        self.commit_tokens(&batch, tokens)
    }

    #[instrument(skip_all, fields(session = %self.id, name = %step.name))]
    pub fn add_font_families(&mut self, step: &FontFamiliesStep) -> TokensmithResult<Inserted> {
        validator::validate_path(&step.path, &step.name)?;
        let tokens = step
            .families
            .iter()
            .map(|(name, stack)| NamedToken::new(name, Token::new(stack.as_str(), TokenType::FontFamily)))
            .collect();
        let batch = Batch {
            path: &step.path,
            name: &step.name,
            token_type: TokenType::FontFamily,
            variant: None,
            description: None,
        };
        self.commit_tokens(&batch, tokens)
    }

    /// Box-shadow elevations; the variant disambiguates leaves sharing a name.
    #[instrument(skip_all, fields(session = %self.id, name = %step.name, variant = %step.variant))]
    pub fn add_shadow(&mut self, step: &ShadowStep) -> TokensmithResult<Inserted> {
        validator::validate_path(&step.path, &step.name)?;
        if !(0.0..=1.0).contains(&step.opacity) {
            return Err(DomainError::InvalidScaleParameter {
                parameter: "opacity",
                reason: format!("{} is outside 0..=1", step.opacity),
            }
            .into());
        }
        let color = self.mixer.parse(&step.color)?;
        let spec = ScaleSpec::builder(Algorithm::Modular, step.count)
            .base(step.base)
            .ratio(step.ratio)
            .build()?;
        let points = ScaleGenerator::points(&spec)?;

        let batch = Batch {
            path: &step.path,
            name: &step.name,
            token_type: TokenType::BoxShadow,
            variant: Some(step.variant.as_str()),
            description: step.description.as_deref(),
        };
        let (variant, opacity) = (step.variant, step.opacity);
        self.commit_points(&batch, &points, &step.naming, None, |raw| {
            box_shadow(raw.as_number().unwrap_or_default(), variant, color, opacity)
        })
    }

    /// Composite styles whose entries reference earlier tokens.
    ///
    /// A reference that does not resolve is left unset, or fails the step
    /// when `strict` is set.
    #[instrument(skip_all, fields(session = %self.id, name = %step.name))]
    pub fn add_text_styles(&mut self, step: &TextStylesStep) -> TokensmithResult<Inserted> {
        validator::validate_path(&step.path, &step.name)?;
        let mut tokens = Vec::with_capacity(step.styles.len());

        for (style, text) in &step.styles {
            let mut composite = CompositeValue::new();
            for (property, value) in text.entries() {
                let resolved = match value {
                    Some(value) => self.resolve_reference(step, style, property, value)?,
                    None => None,
                };
                composite.set(property, resolved);
            }
            tokens.push(NamedToken::new(style, Token::composite(composite)));
        }

        let batch = Batch {
            path: &step.path,
            name: &step.name,
            token_type: TokenType::Composite,
            variant: None,
            description: None,
        };
        self.commit_tokens(&batch, tokens)
    }

    // -------------------------------------------------------------------------
    // Output
    // -------------------------------------------------------------------------

    pub fn render(&self, format: ArtifactFormat) -> String {
        self.serializer.render(&self.tree, format)
    }

    pub fn render_all(&self) -> Vec<(ArtifactFormat, String)> {
        ArtifactFormat::ALL
            .iter()
            .map(|&format| (format, self.render(format)))
            .collect()
    }

    /// Render each format and hand it to `sink`, stopping at the first failure.
    #[instrument(skip_all, fields(session = %self.id, family = %family))]
    pub fn export(
        &self,
        family: &str,
        formats: &[ArtifactFormat],
        sink: &dyn ArtifactSink,
    ) -> TokensmithResult<()> {
        for &format in formats {
            let contents = self.render(format);
            sink.write_artifact(family, format, &contents)?;
            debug!(%format, bytes = contents.len(), "Artifact exported");
        }
        info!(formats = formats.len(), "Export completed");
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn mix_range(&self, min_mix: Option<f64>, max_mix: Option<f64>) -> (f64, f64) {
        (
            min_mix.unwrap_or(self.color_defaults.min_mix),
            max_mix.unwrap_or(self.color_defaults.max_mix),
        )
    }

    fn resolve_reference(
        &self,
        step: &TextStylesStep,
        style: &str,
        property: &str,
        value: &str,
    ) -> TokensmithResult<Option<String>> {
        let Some(path) = reference_path(value) else {
            return Ok(Some(value.to_string()));
        };
        if self.tree.token_at(path).is_some() {
            return Ok(Some(value.to_string()));
        }
        if step.strict {
            return Err(ApplicationError::UnresolvedReference {
                token: format!("{}.{}.{}", node_path(&step.path.join("."), &step.name), style, property),
                reference: value.to_string(),
            }
            .into());
        }
        warn!(style, property, reference = %value, "Unresolved reference left unset");
        Ok(None)
    }

    /// Name `points`, apply midpoint elision and store them.
    fn commit_points(
        &mut self,
        batch: &Batch<'_>,
        points: &[ScalePoint],
        naming: &Naming,
        midpoint: Option<&MidpointStep>,
        render: impl Fn(&RawValue) -> String,
    ) -> TokensmithResult<Inserted> {
        let leaf = self.resolve_leaf(batch)?;
        let target = NameTarget::new(node_path(&batch.path.join("."), &leaf), &leaf, batch.token_type)
            .with_variant(batch.variant);

        // The leaf namespace is replaced wholesale, so stop names only have
        // to be unique within the batch.
        let mut named = NameAssigner::assign(points, naming, &target, &NameContext::new())?;
        if let Some(midpoint) = midpoint {
            named = elide_midpoint(named, &midpoint.anchor, midpoint.choice)?;
        }

        let tokens = named
            .into_iter()
            .map(|p| {
                let token = describe(Token::new(render(&p.point.raw), batch.token_type), batch.description);
                NamedToken::new(p.name, token)
            })
            .collect();
        self.store(batch, leaf, tokens)
    }

    fn commit_tokens(
        &mut self,
        batch: &Batch<'_>,
        tokens: Vec<NamedToken>,
    ) -> TokensmithResult<Inserted> {
        let leaf = self.resolve_leaf(batch)?;
        self.store(batch, leaf, tokens)
    }

    fn resolve_leaf(&self, batch: &Batch<'_>) -> TokensmithResult<String> {
        let target = NameTarget::new(batch.path.join("."), batch.name, batch.token_type)
            .with_variant(batch.variant);
        Ok(NameAssigner::resolve(batch.name, &target, &self.names)?)
    }

    fn store(
        &mut self,
        batch: &Batch<'_>,
        leaf: String,
        tokens: Vec<NamedToken>,
    ) -> TokensmithResult<Inserted> {
        let stops: Vec<String> = tokens.iter().map(|t| t.name.clone()).collect();
        self.tree.insert(batch.path, &leaf, tokens)?;

        let parent = batch.path.join(".");
        let node = node_path(&parent, &leaf);
        self.names.record(&parent, &leaf, batch.variant);
        self.names.forget_node(&node);
        for stop in &stops {
            self.names.record(&node, stop, batch.variant);
        }

        info!(node = %node, stops = stops.len(), "Tokens stored");
        Ok(Inserted {
            path: batch.path.to_vec(),
            leaf,
            stops,
        })
    }
}

fn node_path(parent: &str, leaf: &str) -> String {
    if parent.is_empty() {
        leaf.to_string()
    } else {
        format!("{parent}.{leaf}")
    }
}

fn describe(token: Token, description: Option<&str>) -> Token {
    match description {
        Some(description) => token.with_description(description),
        None => token,
    }
}
