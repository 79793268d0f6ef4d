fn main() {
    xltools::init_logging();
    if let Err(err) = xltools::cells::run_single_cell(std::env::args_os()) {
        eprintln!("写入 Excel 文件时出错: {err:#}");
        std::process::exit(1);
    }
}
