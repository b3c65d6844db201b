// ==========================================
// 试卷组卷系统 - 命令行入口
// ==========================================
// 用法: exam-paper-assembler --bank 题库.xlsx --q1 5,5 --q2 5,5 --q3 10
//       exam-paper-assembler --bank 题库.csv --slot 1=5,5 --slot 3=10 --format text
// 退出码: 0 成功 / 1 组卷失败 / 2 参数错误
// ==========================================

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use exam_paper_assembler::api::{collect_slot_arguments, render_outline, ApiError, PaperApi};
use exam_paper_assembler::config::ConfigManager;
use exam_paper_assembler::{i18n, logging};

/// 试卷组卷系统: 从题库中按题位分值组卷, 使各课程目标分值均衡
#[derive(Parser, Debug)]
#[command(name = "exam-paper-assembler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 题库文件（.xlsx/.xls/.xlsm/.ods/.csv/.json）
    #[arg(long, value_name = "FILE")]
    bank: PathBuf,

    /// 题位分值, 可重复, 如 --slot 1=5,5（覆盖同题位的 --qN）
    #[arg(long = "slot", value_name = "N=LIST")]
    slots: Vec<String>,

    /// 第 1 题分值列表
    #[arg(long, value_name = "LIST")]
    q1: Option<String>,

    /// 第 2 题分值列表
    #[arg(long, value_name = "LIST")]
    q2: Option<String>,

    /// 第 3 题分值列表
    #[arg(long, value_name = "LIST")]
    q3: Option<String>,

    /// 第 4 题分值列表
    #[arg(long, value_name = "LIST")]
    q4: Option<String>,

    /// 第 5 题分值列表
    #[arg(long, value_name = "LIST")]
    q5: Option<String>,

    /// 第 6 题分值列表
    #[arg(long, value_name = "LIST")]
    q6: Option<String>,

    /// 配置文件（JSON）
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 输出语言
    #[arg(long, value_parser = ["zh-CN", "en"])]
    locale: Option<String>,

    /// 输出格式
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// 以 JSON 格式输出日志
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

impl Cli {
    /// 合并 --q1..--q6 与 --slot, 得到按题位排列的原始字符串
    fn raw_positions(&self, max_positions: usize) -> Result<Vec<Option<String>>, ApiError> {
        let mut raw: Vec<Option<String>> = [&self.q1, &self.q2, &self.q3, &self.q4, &self.q5, &self.q6]
            .into_iter()
            .cloned()
            .collect();
        while matches!(raw.last(), Some(None)) {
            raw.pop();
        }

        let overrides = collect_slot_arguments(&self.slots, max_positions)?;
        if raw.len() < overrides.len() {
            raw.resize(overrides.len(), None);
        }
        for (idx, value) in overrides.into_iter().enumerate() {
            if value.is_some() {
                raw[idx] = value;
            }
        }
        Ok(raw)
    }
}

fn main() -> ExitCode {
    // 参数错误由 clap 直接以退出码 2 结束
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::debug!(app = exam_paper_assembler::APP_NAME, version = exam_paper_assembler::VERSION, "启动");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ApiError>() {
            Some(api_err) => {
                eprintln!("{}", api_err.user_message());
                ExitCode::from(exit_code(api_err))
            }
            None => {
                eprintln!("error: {:#}", err);
                ExitCode::from(1)
            }
        },
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if let Some(locale) = &cli.locale {
        i18n::set_locale(locale);
    }

    let manager = ConfigManager::load(cli.config.as_deref()).map_err(ApiError::from)?;
    tracing::debug!(config = %manager.config_snapshot(), source = ?manager.source(), "配置");

    let raw_positions = cli.raw_positions(manager.config().max_positions)?;
    let api = PaperApi::new(manager.into_config());
    let generated = api.generate_from_path(&cli.bank, &raw_positions)?;

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&generated).context("试卷序列化失败")?;
            println!("{}", json);
        }
        OutputFormat::Text => print!("{}", render_outline(&generated)),
    }
    Ok(())
}

/// 题位参数写错属于用法错误, 其余属于组卷失败
fn exit_code(err: &ApiError) -> u8 {
    match err {
        ApiError::MalformedSlotSpec { .. } => 2,
        _ => 1,
    }
}
