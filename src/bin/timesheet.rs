fn main() {
    xltools::init_logging();
    if let Err(err) = xltools::timesheet::run(std::env::args_os()) {
        eprintln!("生成考勤表时出错: {err:#}");
        std::process::exit(1);
    }
}
