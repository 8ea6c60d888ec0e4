// 配置管理模块
// 负责加载和管理应用程序配置

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::env;

use crate::models::{Partner, PartnerDirectory};

/// 默认合作伙伴配置 (用于本地开发环境)
const DEFAULT_PARTNERS: &str =
    "FG-00001:FAKEGOOGLE:FAKEPASSWORD1234,FG-00002:FAKEPEOPLE:FAKEPASSWORD4578";

/// 应用程序配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 服务器配置
    pub server: ServerConfig,
    /// 合作伙伴配置
    pub partners: PartnerConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 服务器监听地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// 工作线程数
    pub workers: Option<usize>,
}

/// 合作伙伴配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerConfig {
    /// 合作伙伴条目列表
    pub entries: Vec<PartnerEntry>,
}

/// 单个合作伙伴配置条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerEntry {
    /// 合作伙伴参考编号
    pub partner_ref_no: String,
    /// 合作伙伴密钥
    pub partner_key: String,
    /// 明文接入密码
    pub password: String,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok(); // 加载.env文件，忽略错误

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .context("Invalid SERVER_PORT")?,
                workers: env::var("SERVER_WORKERS")
                    .ok()
                    .and_then(|s| s.parse().ok()),
            },
            partners: PartnerConfig {
                entries: parse_partner_entries(
                    &env::var("PARTNERS").unwrap_or_else(|_| DEFAULT_PARTNERS.to_string()),
                )?,
            },
        })
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        // 验证服务器配置
        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        // 验证合作伙伴配置
        if self.partners.entries.is_empty() {
            anyhow::bail!("At least one partner entry is required");
        }

        let mut seen = HashSet::new();
        for entry in &self.partners.entries {
            if !seen.insert(entry.partner_ref_no.as_str()) {
                anyhow::bail!("Duplicate partner ref no: {}", entry.partner_ref_no);
            }
        }

        Ok(())
    }

    /// 获取服务器绑定地址
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 构建合作伙伴目录 (明文密码在此编码为Base64)
    pub fn build_directory(&self) -> PartnerDirectory {
        let partners = self
            .partners
            .entries
            .iter()
            .map(|entry| Partner::new(&entry.partner_ref_no, &entry.partner_key, &entry.password))
            .collect();

        PartnerDirectory::new(partners)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: None,
            },
            partners: PartnerConfig {
                entries: vec![
                    PartnerEntry {
                        partner_ref_no: "FG-00001".to_string(),
                        partner_key: "FAKEGOOGLE".to_string(),
                        password: "FAKEPASSWORD1234".to_string(),
                    },
                    PartnerEntry {
                        partner_ref_no: "FG-00002".to_string(),
                        partner_key: "FAKEPEOPLE".to_string(),
                        password: "FAKEPASSWORD4578".to_string(),
                    },
                ],
            },
        }
    }
}

/// 解析PARTNERS环境变量
///
/// 格式: 逗号分隔的 "编号:密钥:明文密码" 三元组
fn parse_partner_entries(raw: &str) -> Result<Vec<PartnerEntry>> {
    let mut entries = Vec::new();

    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let mut fields = part.splitn(3, ':');
        let partner_ref_no = fields.next().unwrap_or_default().trim();
        let partner_key = fields.next().unwrap_or_default().trim();
        let password = fields.next().unwrap_or_default().trim();

        if partner_ref_no.is_empty() || partner_key.is_empty() || password.is_empty() {
            anyhow::bail!("Invalid PARTNERS entry: {}", part);
        }

        entries.push(PartnerEntry {
            partner_ref_no: partner_ref_no.to_string(),
            partner_key: partner_key.to_string(),
            password: password.to_string(),
        });
    }

    Ok(entries)
}
