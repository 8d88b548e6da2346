//! candle-backed star rater: BERT encoder + the sequence-classification head
//! (pooler + linear) from the published checkpoint, files fetched from the
//! Hugging Face hub and cached locally.

use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};
use candle_core::{DType, Device, IndexOp, Tensor, D};
use candle_nn::ops::softmax;
use candle_nn::{Linear, Module, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use hf_hub::{api::sync::Api, Repo, RepoType};
use serde::Deserialize;
use tokenizers::Tokenizer;

use super::{parse_star_label, StarRater, StarRating};

pub struct BertStarRater {
    bert: BertModel,
    pooler: Linear,
    classifier: Linear,
    tokenizer: Tokenizer,
    id2label: HashMap<String, String>,
    device: Device,
}

/// The classifier-head fields of `config.json` that the base
/// [`BertConfig`] does not carry.
#[derive(Deserialize)]
struct HeadConfig {
    hidden_size: usize,
    #[serde(default)]
    id2label: HashMap<String, String>,
}

impl BertStarRater {
    /// Downloads (or reuses the cached) config, weights, and tokenizer for
    /// `model_id`, then assembles the encoder and classification head.
    pub fn load(model_id: &str) -> Result<Self> {
        let device = Device::Cpu;
        let api = Api::new()?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config_path = repo.get("config.json")?;
        let tokenizer_path = repo.get("tokenizer.json")?;
        let weights_path = repo
            .get("model.safetensors")
            .or_else(|_| repo.get("pytorch_model.bin"))?;

        let config_str = std::fs::read_to_string(&config_path)?;
        let config: BertConfig = serde_json::from_str(&config_str)?;
        let head: HeadConfig = serde_json::from_str(&config_str)?;
        if head.id2label.is_empty() {
            bail!("model '{model_id}' has no id2label mapping in config.json");
        }

        let vb = if weights_path.extension().is_some_and(|e| e == "safetensors") {
            unsafe { VarBuilder::from_mmaped_safetensors(&[weights_path], DType::F32, &device)? }
        } else {
            VarBuilder::from_pth(&weights_path, DType::F32, &device)?
        };

        let bert = BertModel::load(vb.pp("bert"), &config)?;
        let pooler = candle_nn::linear(head.hidden_size, head.hidden_size, vb.pp("bert.pooler.dense"))?;
        let classifier = candle_nn::linear(head.hidden_size, head.id2label.len(), vb.pp("classifier"))?;

        let tokenizer = Tokenizer::from_file(tokenizer_path)
            .map_err(|e| anyhow!("failed to load tokenizer: {e}"))?;

        Ok(Self {
            bert,
            pooler,
            classifier,
            tokenizer,
            id2label: head.id2label,
            device,
        })
    }
}

impl StarRater for BertStarRater {
    fn rate(&self, text: &str) -> Result<StarRating> {
        let tokens = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow!("tokenization error: {e}"))?;

        let input_ids = Tensor::new(tokens.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(tokens.get_attention_mask(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        let hidden = self
            .bert
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))?;
        // [CLS] hidden state through the checkpoint's pooler, then the head.
        let pooled = self.pooler.forward(&hidden.i((.., 0))?)?.tanh()?;
        let logits = self.classifier.forward(&pooled)?;

        let pred_id = logits.argmax(D::Minus1)?.squeeze(0)?.to_scalar::<u32>()?;
        let probs = softmax(&logits, D::Minus1)?.squeeze(0)?.to_vec1::<f32>()?;
        let confidence = probs.get(pred_id as usize).copied().unwrap_or(0.0);

        let label = self
            .id2label
            .get(&pred_id.to_string())
            .ok_or_else(|| anyhow!("predicted id '{pred_id}' not in id2label"))?;

        Ok(StarRating {
            stars: parse_star_label(label)?,
            confidence,
        })
    }
}
