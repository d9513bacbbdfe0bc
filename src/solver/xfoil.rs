//! # XFOIL 子进程调用
//!
//! 每次扫描：
//! 1. 在临时目录写入 `airfoil.dat`
//! 2. 启动 XFOIL，把按键脚本写入 stdin，stdout/stderr 重定向到临时目录中的文件
//! 3. 轮询等待进程结束，超过墙钟超时则杀死进程
//! 4. 解析 `polar.txt`，只返回收敛的攻角
//!
//! 进程输出写入文件而不是管道，单线程等待即可，不会因管道写满而阻塞。
//!
//! ## 依赖关系
//! - 被 `sweep/`, `commands/` 使用
//! - 使用 `solver/script.rs`, `parsers/dat.rs`, `parsers/polar.rs`, `utils/scratch.rs`

use super::script::{build_script, DEFAULT_XFOIL_PANELS};
use super::{AeroSolver, FlowConditions};
use crate::error::{Result, StolfoilError};
use crate::models::{Airfoil, Polar};
use crate::parsers;
use crate::utils::output;
use crate::utils::scratch::ScratchDir;

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

const AIRFOIL_FILE: &str = "airfoil.dat";
const POLAR_FILE: &str = "polar.txt";
const STDOUT_FILE: &str = "xfoil_stdout.txt";
const STDERR_FILE: &str = "xfoil_stderr.txt";

/// 轮询子进程状态的间隔
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// "Exec format error"（Linux 与 macOS 相同）
const ENOEXEC: i32 = 8;

/// 失败时附带的输出行数
const TAIL_LINES: usize = 20;

/// XFOIL 调用配置
#[derive(Debug, Clone)]
pub struct XfoilConfig {
    /// 可执行文件名或路径
    pub command: String,
    /// 附加在命令后的参数
    pub args: Vec<String>,
    /// 单次扫描的墙钟超时
    pub timeout: Duration,
    /// XFOIL 内部重新分布的节点数（`None` 时直接使用读入的轮廓）
    pub panel_nodes: Option<usize>,
    /// 保留临时目录
    pub keep_files: bool,
    /// 打印按键脚本与失败时的 XFOIL 输出
    pub verbose: bool,
}

impl Default for XfoilConfig {
    fn default() -> Self {
        XfoilConfig {
            command: "xfoil".to_string(),
            args: Vec::new(),
            timeout: Duration::from_secs(30),
            panel_nodes: Some(DEFAULT_XFOIL_PANELS),
            keep_files: false,
            verbose: false,
        }
    }
}

/// 基于子进程的 XFOIL 求解器
#[derive(Debug, Clone)]
pub struct XfoilRunner {
    config: XfoilConfig,
}

impl XfoilRunner {
    pub fn new(config: XfoilConfig) -> Self {
        XfoilRunner { config }
    }

    fn spawn(&self, workdir: &Path) -> Result<Child> {
        let stdout = create_file(&workdir.join(STDOUT_FILE))?;
        let stderr = create_file(&workdir.join(STDERR_FILE))?;

        Command::new(&self.config.command)
            .args(&self.config.args)
            .current_dir(workdir)
            .stdin(Stdio::piped())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .spawn()
            .map_err(|e| spawn_error(&self.config.command, e))
    }

    /// 等待进程结束；超时返回 `None`
    fn wait_with_timeout(&self, child: &mut Child) -> Result<Option<ExitStatus>> {
        let start = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(Some(status)),
                Ok(None) if start.elapsed() >= self.config.timeout => return Ok(None),
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    return Err(StolfoilError::CommandFailed {
                        command: self.config.command.clone(),
                        stderr: e.to_string(),
                    })
                }
            }
        }
    }

    fn failure(&self, workdir: &Path, reason: &str) -> StolfoilError {
        let mut detail = reason.to_string();
        for file in [STDOUT_FILE, STDERR_FILE] {
            let tail = read_tail(&workdir.join(file), TAIL_LINES);
            if !tail.is_empty() {
                detail.push('\n');
                detail.push_str(&tail);
            }
        }
        StolfoilError::CommandFailed {
            command: self.config.command.clone(),
            stderr: detail,
        }
    }
}

impl AeroSolver for XfoilRunner {
    fn name(&self) -> &str {
        &self.config.command
    }

    fn solve(
        &self,
        airfoil: &Airfoil,
        flow: &FlowConditions,
        alphas: &[f64],
        label: &str,
    ) -> Result<Polar> {
        if alphas.is_empty() {
            return Ok(Polar::empty(label, Vec::new()));
        }
        flow.validate()?;

        let mut scratch = ScratchDir::new("xfoil")?;
        scratch.keep(self.config.keep_files);
        let workdir = scratch.path();

        parsers::write_dat_file(airfoil, &workdir.join(AIRFOIL_FILE))?;

        let script = build_script(flow, alphas, AIRFOIL_FILE, POLAR_FILE, self.config.panel_nodes);
        if self.config.verbose {
            output::print_detail(&script);
        }

        let mut child = self.spawn(workdir)?;

        // XFOIL 可能提前退出，写入失败不影响后续判断
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(script.as_bytes()).ok();
        }

        let status = match self.wait_with_timeout(&mut child)? {
            Some(status) => status,
            None => {
                child.kill().ok();
                child.wait().ok();
                return Err(StolfoilError::SolverTimeout {
                    command: self.config.command.clone(),
                    seconds: self.config.timeout.as_secs_f64(),
                });
            }
        };

        if self.config.keep_files {
            output::print_info(&format!("XFOIL files kept in '{}'", workdir.display()));
        }

        let polar_path = workdir.join(POLAR_FILE);
        if !polar_path.exists() {
            let err = self.failure(
                workdir,
                &format!("no polar file written (exit status: {})", status),
            );
            return Err(err);
        }

        // 进程崩溃但已写出部分结果时保留已收敛的点
        let points = parsers::parse_polar_file(&polar_path)?;
        if let Some(warning) = exit_warning(&self.config.command, label, status, points.len()) {
            output::print_warning(&warning);
        }

        Ok(Polar::new(label, alphas.to_vec(), points))
    }
}

/// 启动失败分类：不存在或不可执行的程序属于环境错误
fn spawn_error(command: &str, err: std::io::Error) -> StolfoilError {
    let not_runnable = matches!(err.kind(), ErrorKind::NotFound | ErrorKind::PermissionDenied)
        || err.raw_os_error() == Some(ENOEXEC);
    if not_runnable {
        StolfoilError::CommandNotFound {
            command: command.to_string(),
        }
    } else {
        StolfoilError::CommandFailed {
            command: command.to_string(),
            stderr: err.to_string(),
        }
    }
}

/// 进程异常退出但仍有部分结果时的警告
fn exit_warning(command: &str, label: &str, status: ExitStatus, kept: usize) -> Option<String> {
    if status.success() {
        return None;
    }
    Some(format!(
        "{}: {} exited with {}, keeping {} converged points",
        label, command, status, kept
    ))
}

fn create_file(path: &Path) -> Result<File> {
    File::create(path).map_err(|e| StolfoilError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 读取文件最后 n 行（文件不存在时为空）
fn read_tail(path: &Path, n: usize) -> String {
    let content = fs::read_to_string(path).unwrap_or_default();
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(n);
    lines[start..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::naca;

    fn airfoil() -> Airfoil {
        naca::from_designation("naca4412", 40).unwrap().unwrap()
    }

    fn runner_for_script(dir: &ScratchDir, body: &str, timeout: Duration) -> XfoilRunner {
        let script = dir.path().join("fake_xfoil.sh");
        fs::write(&script, format!("#!/bin/sh\n{}\n", body)).unwrap();
        XfoilRunner::new(XfoilConfig {
            command: "sh".to_string(),
            args: vec![script.display().to_string()],
            timeout,
            ..Default::default()
        })
    }

    #[test]
    fn test_empty_alpha_list_skips_process() {
        let runner = XfoilRunner::new(XfoilConfig {
            command: "stolfoil-no-such-xfoil".to_string(),
            ..Default::default()
        });
        let polar = runner
            .solve(&airfoil(), &FlowConditions::default(), &[], "empty")
            .unwrap();
        assert!(polar.is_empty());
        assert!(polar.requested.is_empty());
    }

    #[test]
    fn test_missing_executable_is_setup_failure() {
        let runner = XfoilRunner::new(XfoilConfig {
            command: "stolfoil-no-such-xfoil".to_string(),
            ..Default::default()
        });
        let err = runner
            .solve(&airfoil(), &FlowConditions::default(), &[0.0], "missing")
            .unwrap_err();
        assert!(err.is_setup_failure());
    }

    #[test]
    fn test_invalid_flow_rejected_before_spawn() {
        let runner = XfoilRunner::new(XfoilConfig::default());
        let flow = FlowConditions::new(-5.0, None);
        let err = runner.solve(&airfoil(), &flow, &[0.0], "bad").unwrap_err();
        assert!(matches!(err, StolfoilError::InvalidArgument(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_partial_polar_from_fake_xfoil() {
        let dir = ScratchDir::new("fake-xfoil").unwrap();
        let body = r#"cat > /dev/null
test -f airfoil.dat || exit 3
cat > polar.txt <<'POLAR'
  alpha    CL        CD       CDp       CM     Top_Xtr  Bot_Xtr
 ------ -------- --------- --------- -------- -------- --------
 -5.000  -0.0523   0.00923   0.00401  -0.1007   0.9402   0.0452
  0.000   0.4869   0.00662   0.00160  -0.1057   0.6521   1.0000
 10.000   1.4321   0.01384   0.00791  -0.0940   0.1523   1.0000
POLAR"#;
        let runner = runner_for_script(&dir, body, Duration::from_secs(10));

        let alphas = crate::geometry::spacing::linspace(-5.0, 15.0, 21);
        let polar = runner
            .solve(&airfoil(), &FlowConditions::new(1e6, Some(0.1)), &alphas, "baseline")
            .unwrap();

        assert_eq!(polar.label, "baseline");
        assert_eq!(polar.points.len(), 3);
        assert!(polar.points.len() <= alphas.len());
        assert!(polar.points.iter().all(|p| p.cl.is_finite()));
        assert_eq!(polar.missing_alphas().len(), 18);
        assert!((polar.cl_max().unwrap().cl - 1.4321).abs() < 1e-12);
    }

    #[cfg(unix)]
    #[test]
    fn test_no_converged_points_gives_empty_polar() {
        let dir = ScratchDir::new("fake-xfoil").unwrap();
        let body = r#"cat > /dev/null
printf '  alpha    CL        CD       CDp       CM     Top_Xtr  Bot_Xtr\n' > polar.txt"#;
        let runner = runner_for_script(&dir, body, Duration::from_secs(10));

        let polar = runner
            .solve(&airfoil(), &FlowConditions::default(), &[28.0, 29.0], "Flap 30°")
            .unwrap();
        assert!(polar.is_empty());
        assert_eq!(polar.missing_alphas(), vec![28.0, 29.0]);
    }

    #[cfg(unix)]
    #[test]
    fn test_timeout_kills_process() {
        let dir = ScratchDir::new("fake-xfoil").unwrap();
        let runner = runner_for_script(&dir, "sleep 5", Duration::from_millis(200));

        let start = Instant::now();
        let err = runner
            .solve(&airfoil(), &FlowConditions::default(), &[0.0], "slow")
            .unwrap_err();

        assert!(matches!(err, StolfoilError::SolverTimeout { .. }));
        assert!(!err.is_setup_failure());
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[cfg(unix)]
    #[test]
    fn test_crash_without_polar_reports_output_tail() {
        let dir = ScratchDir::new("fake-xfoil").unwrap();
        let body = "cat > /dev/null\necho 'Floating point exception'\nexit 136";
        let runner = runner_for_script(&dir, body, Duration::from_secs(10));

        let err = runner
            .solve(&airfoil(), &FlowConditions::default(), &[0.0], "crash")
            .unwrap_err();
        match err {
            StolfoilError::CommandFailed { stderr, .. } => {
                assert!(stderr.contains("Floating point exception"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_crash_after_partial_polar_keeps_points() {
        let dir = ScratchDir::new("fake-xfoil").unwrap();
        let body = r#"cat > /dev/null
cat > polar.txt <<'POLAR'
  alpha    CL        CD       CDp       CM     Top_Xtr  Bot_Xtr
 ------ -------- --------- --------- -------- -------- --------
 -5.000  -0.0523   0.00923   0.00401  -0.1007   0.9402   0.0452
POLAR
kill -FPE $$"#;
        let runner = runner_for_script(&dir, body, Duration::from_secs(10));

        let polar = runner
            .solve(&airfoil(), &FlowConditions::default(), &[-5.0, 0.0], "Flap 30°")
            .unwrap();
        assert_eq!(polar.points.len(), 1);
        assert_eq!(polar.missing_alphas(), vec![0.0]);
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_warning_names_configuration() {
        use std::os::unix::process::ExitStatusExt;

        let crashed = ExitStatus::from_raw(8);
        let warning = exit_warning("xfoil", "Flap 30°", crashed, 1).unwrap();
        assert!(warning.starts_with("Flap 30°: xfoil exited with"));
        assert!(warning.contains("keeping 1 converged points"));

        assert!(exit_warning("xfoil", "Flap 0°", ExitStatus::from_raw(0), 21).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_exec_format_error_is_setup_failure() {
        let err = spawn_error("xfoil", std::io::Error::from_raw_os_error(ENOEXEC));
        assert!(err.is_setup_failure());

        let err = spawn_error("xfoil", std::io::Error::new(ErrorKind::Other, "boom"));
        assert!(!err.is_setup_failure());
    }

    #[test]
    fn test_read_tail() {
        let dir = ScratchDir::new("tail").unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "a\nb\n\nc\nd\n").unwrap();
        assert_eq!(read_tail(&path, 2), "c\nd");
        assert_eq!(read_tail(&dir.path().join("missing"), 2), "");
    }
}
