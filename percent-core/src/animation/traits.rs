//! # Traits 模块
//!
//! 动画驱动器接口。
//!
//! 波浪组件同时运行三个驱动器（填充过渡、相位振荡、振幅脉冲），
//! 每帧各自推进一次，各自只拥有一个派生值，渲染端只读。

/// 逐帧推进的动画驱动器
pub trait AnimationDriver {
    /// 推进 `dt` 秒
    ///
    /// # 返回
    /// - `true`: 驱动器仍在运行，下一帧还需要推进
    /// - `false`: 驱动器已静止
    fn tick(&mut self, dt: f32) -> bool;

    /// 当前输出值
    fn value(&self) -> f32;

    /// 是否仍在运行
    fn is_running(&self) -> bool;
}

/// 依次推进一组驱动器，返回是否还有驱动器在运行
pub fn tick_all(drivers: &mut [&mut dyn AnimationDriver], dt: f32) -> bool {
    let mut running = false;
    for driver in drivers.iter_mut() {
        running |= driver.tick(dt);
    }
    running
}
